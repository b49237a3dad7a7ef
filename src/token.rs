use std::fmt;
use std::mem;

use log::{debug, info};

#[allow(non_camel_case_types)]
#[derive(Debug, Clone)]
pub enum TokenType {
    // Single-character tokens.
    LEFT_PAREN,
    RIGHT_PAREN,
    LEFT_BRACE,
    RIGHT_BRACE,
    COMMA,
    DOT,
    MINUS,
    PLUS,
    SEMICOLON,
    SLASH,
    STAR,

    // One or two character tokens.
    BANG,
    BANG_EQUAL,
    EQUAL,
    EQUAL_EQUAL,
    GREATER,
    GREATER_EQUAL,
    LESS,
    LESS_EQUAL,

    // Literals.
    IDENTIFIER,
    STRING(String),
    NUMBER(f64),

    // Keywords.
    AND,
    CLASS,
    ELSE,
    FALSE,
    FUN,
    FOR,
    IF,
    NIL,
    OR,
    PRINT,
    RETURN,
    SUPER,
    THIS,
    TRUE,
    VAR,
    WHILE,

    // Special Characters
    EOF,
}

/// Two token types are equal when they are the same variant; literal
/// payloads are ignored so the parser can match against dummy values
/// like `NUMBER(0.0)`.
impl PartialEq for TokenType {
    fn eq(&self, other: &Self) -> bool {
        debug!("Comparing TokenType: self={:?}, other={:?}", self, other);

        let matched = mem::discriminant(self) == mem::discriminant(other);

        debug!(
            "TokenType comparison result: {}",
            if matched { "match" } else { "no match" }
        );

        matched
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
    pub line: usize,
}

impl Token {
    pub fn new(token_type: TokenType, lexeme: String, line: usize) -> Self {
        info!(
            "Creating new token: type={:?}, lexeme={}, line={}",
            token_type, lexeme, line
        );
        Self {
            token_type,
            lexeme,
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug!(
            "Formatting token: type={:?}, lexeme={}, line={}",
            self.token_type, self.lexeme, self.line
        );

        let literal: String = match &self.token_type {
            TokenType::STRING(literal) => {
                debug!("Formatting STRING literal: {}", literal);
                literal.clone()
            }

            TokenType::NUMBER(num_literal) => {
                let formatted = if num_literal.fract() == 0.0 {
                    format!("{:.1}", num_literal)
                } else {
                    format!("{}", num_literal)
                };

                debug!(
                    "Formatting NUMBER literal: {} -> {}",
                    num_literal, formatted
                );

                formatted
            }

            _ => {
                debug!("Formatting non-literal token: null");
                "null".to_string()
            }
        };

        let tmp: String = format!("{:?}", self.token_type);
        let type_name: &str = tmp.split('(').next().unwrap_or(&tmp);

        info!("Formatted token: {} {} {}", type_name, self.lexeme, literal);

        write!(f, "{} {} {}", type_name, self.lexeme, literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_types_compare_by_variant() {
        assert_eq!(TokenType::NUMBER(1.5), TokenType::NUMBER(42.0));
        assert_eq!(
            TokenType::STRING("a".to_string()),
            TokenType::STRING("b".to_string())
        );
        assert_ne!(TokenType::NUMBER(0.0), TokenType::STRING(String::new()));
        assert_ne!(TokenType::LEFT_PAREN, TokenType::RIGHT_PAREN);
    }

    #[test]
    fn display_includes_literal_payload() {
        let token = Token::new(TokenType::NUMBER(3.0), "3".to_string(), 1);
        assert_eq!(token.to_string(), "NUMBER 3 3.0");

        let token = Token::new(TokenType::SEMICOLON, ";".to_string(), 2);
        assert_eq!(token.to_string(), "SEMICOLON ; null");
    }
}
