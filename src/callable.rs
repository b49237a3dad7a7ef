use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;

use crate::ast::FunctionDecl;
use crate::environment::Environment;
use crate::error::Result;
use crate::interpreter::{Flow, Interpreter};
use crate::value::Value;

/// A user-defined function: its declaration plus the environment that
/// was live when the `fun` statement executed.
pub struct Function {
    declaration: Rc<FunctionDecl>,
    closure: Rc<RefCell<Environment>>,
}

impl Function {
    pub fn new(declaration: Rc<FunctionDecl>, closure: Rc<RefCell<Environment>>) -> Self {
        Function {
            declaration,
            closure,
        }
    }

    pub fn name(&self) -> &str {
        &self.declaration.name.lexeme
    }

    pub fn arity(&self) -> usize {
        self.declaration.params.len()
    }

    /// Bind arguments in a fresh child of the captured closure, then
    /// run the body.  A `return` surfaces as [`Flow::Return`]; falling
    /// off the end yields `nil`.
    pub fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Value>) -> Result<Value> {
        debug!("Calling <fn {}> with {} args", self.name(), arguments.len());

        let environment = Rc::new(RefCell::new(Environment::with_enclosing(Rc::clone(
            &self.closure,
        ))));

        for (param, argument) in self.declaration.params.iter().zip(arguments) {
            environment.borrow_mut().define(&param.lexeme, argument);
        }

        match interpreter.execute_block(&self.declaration.body, environment)? {
            Flow::Return(value) => Ok(value),

            Flow::Normal => Ok(Value::Nil),
        }
    }
}

// Manual impl: deriving would recurse into the closure chain, which may
// contain this very function.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.name())
    }
}

/// The `clock` native: wall-clock seconds since the Unix epoch.
pub fn clock() -> Value {
    Value::NativeFunction {
        name: "clock".to_string(),
        arity: 0,
        func: clock_native,
    }
}

fn clock_native(_args: &[Value]) -> std::result::Result<Value, String> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| format!("Clock error: {}", e))?
        .as_secs_f64();

    Ok(Value::Number(timestamp))
}
