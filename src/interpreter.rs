use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Write};
use std::rc::Rc;

use crate::ast::{Expr, LiteralValue, Stmt};
use crate::callable::{self, Function};
use crate::environment::Environment;
use crate::error::{MinnowError, Result};
use crate::token::{Token, TokenType};
use crate::value::Value;

/// How a statement finished: fell through normally, or hit `return`.
///
/// `return` is ordinary control flow, not an error; it propagates
/// through every statement-execution path and is caught only by
/// user-function invocation.
#[derive(Debug)]
pub enum Flow {
    Normal,
    Return(Value),
}

pub struct Interpreter {
    globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    /// Resolver side table: expression id to environment-chain hops.
    /// Absent ids are globals, looked up dynamically.
    locals: HashMap<usize, usize>,
    out: Box<dyn Write>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_output(Box::new(io::stdout()))
    }

    /// Route `print` output to the given writer; tests capture it.
    pub fn with_output(out: Box<dyn Write>) -> Self {
        let globals = Rc::new(RefCell::new(Environment::new()));

        globals.borrow_mut().define("clock", callable::clock());

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
            out,
        }
    }

    /// Record a resolved local.  Called by the resolver; the table is
    /// read-only once evaluation starts.
    pub fn note_local(&mut self, id: usize, depth: usize) {
        self.locals.insert(id, depth);
    }

    /// Run a resolved program.  The first runtime error aborts the run
    /// and is handed back for reporting.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<()> {
        for statement in statements {
            self.execute(statement)?;
        }

        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────
    // Statements
    // ─────────────────────────────────────────────────────────────────

    fn execute(&mut self, stmt: &Stmt) -> Result<Flow> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;

                Ok(Flow::Normal)
            }

            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;

                writeln!(self.out, "{}", value)?;

                Ok(Flow::Normal)
            }

            Stmt::Var { name, initializer } => {
                let value: Value = if let Some(expr) = initializer {
                    self.evaluate(expr)?
                } else {
                    Value::Nil
                };

                self.environment.borrow_mut().define(&name.lexeme, value);

                Ok(Flow::Normal)
            }

            Stmt::Block(statements) => {
                let environment = Rc::new(RefCell::new(Environment::with_enclosing(Rc::clone(
                    &self.environment,
                ))));

                self.execute_block(statements, environment)
            }

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            }

            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    match self.execute(body)? {
                        Flow::Normal => {}

                        flow @ Flow::Return(_) => return Ok(flow),
                    }
                }

                Ok(Flow::Normal)
            }

            Stmt::Function(declaration) => {
                // The closure is captured here, at declaration
                // execution, not at call time.
                let function = Function::new(Rc::clone(declaration), Rc::clone(&self.environment));

                self.environment
                    .borrow_mut()
                    .define(&declaration.name.lexeme, Value::Function(Rc::new(function)));

                Ok(Flow::Normal)
            }

            Stmt::Return { value, .. } => {
                let value: Value = if let Some(expr) = value {
                    self.evaluate(expr)?
                } else {
                    Value::Nil
                };

                Ok(Flow::Return(value))
            }
        }
    }

    /// Run statements in the given environment, restoring the previous
    /// one on every exit path: normal completion, runtime error, or a
    /// `return` unwinding through.
    pub(crate) fn execute_block(
        &mut self,
        statements: &[Stmt],
        environment: Rc<RefCell<Environment>>,
    ) -> Result<Flow> {
        let previous: Rc<RefCell<Environment>> = Rc::clone(&self.environment);

        self.environment = environment;

        for statement in statements {
            match self.execute(statement) {
                Ok(Flow::Normal) => {}

                Ok(flow @ Flow::Return(_)) => {
                    self.environment = previous;
                    return Ok(flow);
                }

                Err(e) => {
                    self.environment = previous;
                    return Err(e);
                }
            }
        }

        self.environment = previous;

        Ok(Flow::Normal)
    }

    // ─────────────────────────────────────────────────────────────────
    // Expressions
    // ─────────────────────────────────────────────────────────────────

    fn evaluate(&mut self, expr: &Expr) -> Result<Value> {
        match expr {
            Expr::Literal(literal) => Ok(match literal {
                LiteralValue::Nil => Value::Nil,
                LiteralValue::True => Value::Bool(true),
                LiteralValue::False => Value::Bool(false),
                LiteralValue::Number(n) => Value::Number(*n),
                LiteralValue::Str(s) => Value::Str(s.clone()),
            }),

            Expr::Grouping(inner) => self.evaluate(inner),

            Expr::Unary { operator, right } => self.evaluate_unary(operator, right),

            Expr::Binary {
                left,
                operator,
                right,
            } => self.evaluate_binary(left, operator, right),

            Expr::Logical {
                left,
                operator,
                right,
            } => {
                let left_val = self.evaluate(left)?;

                // The left operand alone may decide; the result is the
                // deciding operand's value, never a coerced boolean.
                match operator.token_type {
                    TokenType::OR if left_val.is_truthy() => Ok(left_val),

                    TokenType::AND if !left_val.is_truthy() => Ok(left_val),

                    _ => self.evaluate(right),
                }
            }

            Expr::Variable { id, name } => self.look_up_variable(*id, name),

            Expr::Assign { id, name, value } => {
                let value = self.evaluate(value)?;

                match self.locals.get(id) {
                    Some(&distance) => {
                        Environment::assign_at(&self.environment, distance, name, value.clone())?;
                    }

                    None => {
                        self.globals.borrow_mut().assign(name, value.clone())?;
                    }
                }

                Ok(value)
            }

            Expr::Call {
                callee,
                paren,
                arguments,
            } => self.evaluate_call(callee, paren, arguments),
        }
    }

    fn evaluate_unary(&mut self, operator: &Token, right: &Expr) -> Result<Value> {
        let value: Value = self.evaluate(right)?;

        match operator.token_type {
            TokenType::MINUS => match value {
                Value::Number(n) => Ok(Value::Number(-n)),

                _ => Err(MinnowError::runtime(
                    operator.line,
                    "Operand must be a number.",
                )),
            },

            TokenType::BANG => Ok(Value::Bool(!value.is_truthy())),

            _ => Err(MinnowError::runtime(operator.line, "Invalid unary operator.")),
        }
    }

    fn evaluate_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> Result<Value> {
        // Both operands evaluate, left to right, before any type check.
        let left_val: Value = self.evaluate(left)?;
        let right_val: Value = self.evaluate(right)?;

        match operator.token_type {
            TokenType::PLUS => match (left_val, right_val) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),

                (Value::Str(a), Value::Str(b)) => Ok(Value::Str(a + &b)),

                _ => Err(MinnowError::runtime(
                    operator.line,
                    "Operands must be two numbers or two strings.",
                )),
            },

            TokenType::MINUS => match (left_val, right_val) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a - b)),

                _ => Err(numbers_required(operator)),
            },

            TokenType::STAR => match (left_val, right_val) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a * b)),

                _ => Err(numbers_required(operator)),
            },

            // Division by zero follows IEEE-754: inf, -inf, or NaN.
            TokenType::SLASH => match (left_val, right_val) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a / b)),

                _ => Err(numbers_required(operator)),
            },

            TokenType::GREATER => match (left_val, right_val) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Bool(a > b)),

                _ => Err(numbers_required(operator)),
            },

            TokenType::GREATER_EQUAL => match (left_val, right_val) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Bool(a >= b)),

                _ => Err(numbers_required(operator)),
            },

            TokenType::LESS => match (left_val, right_val) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Bool(a < b)),

                _ => Err(numbers_required(operator)),
            },

            TokenType::LESS_EQUAL => match (left_val, right_val) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Bool(a <= b)),

                _ => Err(numbers_required(operator)),
            },

            TokenType::EQUAL_EQUAL => Ok(Value::Bool(left_val == right_val)),

            TokenType::BANG_EQUAL => Ok(Value::Bool(left_val != right_val)),

            _ => Err(MinnowError::runtime(
                operator.line,
                "Invalid binary operator.",
            )),
        }
    }

    fn evaluate_call(&mut self, callee: &Expr, paren: &Token, arguments: &[Expr]) -> Result<Value> {
        let callee_val = self.evaluate(callee)?;

        let mut args: Vec<Value> = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.evaluate(argument)?);
        }

        match callee_val {
            Value::Function(function) => {
                if args.len() != function.arity() {
                    return Err(arity_mismatch(paren, function.arity(), args.len()));
                }

                function.call(self, args)
            }

            Value::NativeFunction { arity, func, .. } => {
                if args.len() != arity {
                    return Err(arity_mismatch(paren, arity, args.len()));
                }

                func(&args).map_err(|message| MinnowError::runtime(paren.line, message))
            }

            _ => Err(MinnowError::runtime(
                paren.line,
                "Can only call functions and classes.",
            )),
        }
    }

    fn look_up_variable(&self, id: usize, name: &Token) -> Result<Value> {
        match self.locals.get(&id) {
            Some(&distance) => Environment::get_at(&self.environment, distance, name),

            None => self.globals.borrow().get(name),
        }
    }
}

fn numbers_required(operator: &Token) -> MinnowError {
    MinnowError::runtime(operator.line, "Operands must be numbers.")
}

fn arity_mismatch(paren: &Token, expected: usize, got: usize) -> MinnowError {
    MinnowError::runtime(
        paren.line,
        format!("Expected {} arguments but got {}.", expected, got),
    )
}
