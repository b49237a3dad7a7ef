use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{MinnowError, Result};
use crate::token::Token;
use crate::value::Value;

/// One scope in the chain.  The chain is acyclic and rooted at the
/// globals environment, which has no enclosing parent.
#[derive(Debug, Default)]
pub struct Environment {
    values: HashMap<String, Value>,
    enclosing: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            values: HashMap::new(),
            enclosing: None,
        }
    }

    pub fn with_enclosing(enclosing: Rc<RefCell<Environment>>) -> Self {
        Environment {
            values: HashMap::new(),
            enclosing: Some(enclosing),
        }
    }

    /// Unconditionally bind in this scope, shadowing or overwriting any
    /// existing same-name binding here.
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Dynamic lookup: this scope first, then outward along the chain.
    pub fn get(&self, name: &Token) -> Result<Value> {
        if let Some(value) = self.values.get(&name.lexeme) {
            Ok(value.clone())
        } else if let Some(enclosing) = &self.enclosing {
            enclosing.borrow().get(name)
        } else {
            Err(undefined(name))
        }
    }

    /// Dynamic write: same walk as [`Environment::get`].
    pub fn assign(&mut self, name: &Token, value: Value) -> Result<()> {
        if self.values.contains_key(&name.lexeme) {
            self.values.insert(name.lexeme.clone(), value);
            Ok(())
        } else if let Some(enclosing) = &self.enclosing {
            enclosing.borrow_mut().assign(name, value)
        } else {
            Err(undefined(name))
        }
    }

    /// Read a local at exactly `distance` hops out, with no chain
    /// fallback.  The resolver guarantees presence; a miss here still
    /// surfaces as an undefined-variable error rather than a panic.
    pub fn get_at(env: &Rc<RefCell<Environment>>, distance: usize, name: &Token) -> Result<Value> {
        let scope = Self::ancestor(env, distance).ok_or_else(|| undefined(name))?;
        let value = scope.borrow().values.get(&name.lexeme).cloned();
        value.ok_or_else(|| undefined(name))
    }

    /// Write a local at exactly `distance` hops out.
    pub fn assign_at(
        env: &Rc<RefCell<Environment>>,
        distance: usize,
        name: &Token,
        value: Value,
    ) -> Result<()> {
        let scope = Self::ancestor(env, distance).ok_or_else(|| undefined(name))?;
        let mut scope = scope.borrow_mut();

        if scope.values.contains_key(&name.lexeme) {
            scope.values.insert(name.lexeme.clone(), value);
            Ok(())
        } else {
            Err(undefined(name))
        }
    }

    fn ancestor(
        env: &Rc<RefCell<Environment>>,
        distance: usize,
    ) -> Option<Rc<RefCell<Environment>>> {
        let mut current = Rc::clone(env);

        for _ in 0..distance {
            let enclosing = current.borrow().enclosing.as_ref().map(Rc::clone);
            current = enclosing?;
        }

        Some(current)
    }
}

fn undefined(name: &Token) -> MinnowError {
    MinnowError::runtime(name.line, format!("Undefined variable '{}'.", name.lexeme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenType;

    fn ident(name: &str) -> Token {
        Token::new(TokenType::IDENTIFIER, name.to_string(), 1)
    }

    #[test]
    fn get_walks_the_chain_outward() {
        let globals = Rc::new(RefCell::new(Environment::new()));
        globals.borrow_mut().define("a", Value::Number(1.0));

        let local = Rc::new(RefCell::new(Environment::with_enclosing(Rc::clone(
            &globals,
        ))));

        assert_eq!(local.borrow().get(&ident("a")).unwrap(), Value::Number(1.0));
        assert!(local.borrow().get(&ident("b")).is_err());
    }

    #[test]
    fn local_definitions_shadow_without_clobbering() {
        let globals = Rc::new(RefCell::new(Environment::new()));
        globals
            .borrow_mut()
            .define("a", Value::Str("global".to_string()));

        let local = Rc::new(RefCell::new(Environment::with_enclosing(Rc::clone(
            &globals,
        ))));
        local
            .borrow_mut()
            .define("a", Value::Str("local".to_string()));

        assert_eq!(
            local.borrow().get(&ident("a")).unwrap(),
            Value::Str("local".to_string())
        );
        assert_eq!(
            globals.borrow().get(&ident("a")).unwrap(),
            Value::Str("global".to_string())
        );
    }

    #[test]
    fn assign_writes_to_the_declaring_scope() {
        let globals = Rc::new(RefCell::new(Environment::new()));
        globals.borrow_mut().define("a", Value::Number(1.0));

        let local = Rc::new(RefCell::new(Environment::with_enclosing(Rc::clone(
            &globals,
        ))));
        local
            .borrow_mut()
            .assign(&ident("a"), Value::Number(2.0))
            .unwrap();

        assert_eq!(
            globals.borrow().get(&ident("a")).unwrap(),
            Value::Number(2.0)
        );
    }

    #[test]
    fn depth_indexed_access_skips_intermediate_shadows() {
        let globals = Rc::new(RefCell::new(Environment::new()));
        globals
            .borrow_mut()
            .define("a", Value::Str("outer".to_string()));

        let middle = Rc::new(RefCell::new(Environment::with_enclosing(Rc::clone(
            &globals,
        ))));
        middle
            .borrow_mut()
            .define("a", Value::Str("middle".to_string()));

        let inner = Rc::new(RefCell::new(Environment::with_enclosing(Rc::clone(
            &middle,
        ))));

        assert_eq!(
            Environment::get_at(&inner, 2, &ident("a")).unwrap(),
            Value::Str("outer".to_string())
        );
        assert_eq!(
            Environment::get_at(&inner, 1, &ident("a")).unwrap(),
            Value::Str("middle".to_string())
        );

        Environment::assign_at(&inner, 2, &ident("a"), Value::Str("patched".to_string())).unwrap();
        assert_eq!(
            globals.borrow().get(&ident("a")).unwrap(),
            Value::Str("patched".to_string())
        );
    }

    #[test]
    fn assigning_an_undefined_name_fails() {
        let globals = Rc::new(RefCell::new(Environment::new()));
        let error = globals
            .borrow_mut()
            .assign(&ident("missing"), Value::Nil)
            .unwrap_err();

        assert_eq!(error.to_string(), "Undefined variable 'missing'.\n[line 1]");
    }
}
