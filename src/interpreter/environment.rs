use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::Value;

/// A shared, reference-counted handle to an [`Environment`].
///
/// Environments are multiply owned: every function value keeps a handle to
/// its defining environment, and every call frame links back to one.
/// Recursive functions form reference cycles through the environment that
/// binds them; those cycles are tolerated until process exit, which is
/// acceptable because the interpreter makes no finalization guarantees.
pub type Env = Rc<RefCell<Environment>>;

/// A lexical scope: a set of bindings plus a link to the enclosing scope.
///
/// Lookup walks outward along the chain until a binding is found or the
/// chain ends. New bindings always go to the innermost scope, so a `let`
/// inside a function body never disturbs the scope it closed over.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates a fresh, empty outermost environment.
    ///
    /// # Example
    /// ```
    /// use capuchin::interpreter::{environment::Environment, value::Value};
    ///
    /// let env = Environment::new();
    /// env.borrow_mut().set("x".to_string(), Value::Integer(3));
    ///
    /// assert_eq!(env.borrow().get("x"), Some(Value::Integer(3)));
    /// assert_eq!(env.borrow().get("y"), None);
    /// ```
    #[must_use]
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an environment whose lookups fall back to `outer`.
    ///
    /// Call frames are built this way, with the called function's
    /// *defining* environment as the outer link. That link is what makes
    /// closures see their capture site rather than their call site.
    ///
    /// # Example
    /// ```
    /// use capuchin::interpreter::{environment::Environment, value::Value};
    ///
    /// let outer = Environment::new();
    /// outer.borrow_mut().set("x".to_string(), Value::Integer(1));
    ///
    /// let inner = Environment::enclosed(&outer);
    /// inner.borrow_mut().set("y".to_string(), Value::Integer(2));
    ///
    /// // Lookups fall through to the outer scope.
    /// assert_eq!(inner.borrow().get("x"), Some(Value::Integer(1)));
    /// // Bindings stay in the scope that made them.
    /// assert_eq!(outer.borrow().get("y"), None);
    /// ```
    #[must_use]
    pub fn enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Looks up `name`, walking outward through the enclosing scopes.
    ///
    /// Returns a clone of the bound value, or `None` when no scope in the
    /// chain binds the name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer
                        .as_ref()
                        .and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` to `value` in this scope, replacing any binding this
    /// scope already holds for it. Outer scopes are never written to.
    pub fn set(&mut self, name: String, value: Value) {
        self.store.insert(name, value);
    }
}
