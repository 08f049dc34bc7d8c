use failure::Error;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::errors::RunError;
use crate::values::Value;

/// One scope of the interpreter: a HashMap of bindings with an optional
/// parent EnvRef. The same structure serves as a block scope, an activation
/// record, a class body and an object instance; only the parent link differs.
#[derive(Clone)]
pub struct Env {
    vars: HashMap<String, Value>,
    parent: Option<EnvRef>,
}

/// an interior-mutable, reference-counted smart pointer wrapper around an `Env`
pub type EnvRef = Rc<RefCell<Env>>;

impl Env {
    /// create an empty environment
    pub fn new(parent: Option<EnvRef>) -> Env {
        Env::with_vars(HashMap::new(), parent)
    }

    /// create an environment seeded with some bindings
    pub fn with_vars(vars: HashMap<String, Value>, parent: Option<EnvRef>) -> Env {
        Env { vars, parent }
    }

    pub fn into_ref(self) -> EnvRef {
        Rc::new(RefCell::new(self))
    }

    pub fn parent(&self) -> Option<EnvRef> {
        self.parent.clone()
    }

    /// the names bound in this frame alone, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.vars.keys().cloned().collect();
        names.sort();
        names
    }

    /// add (or overwrite) a binding in this frame
    pub fn define(&mut self, var_name: &str, value: Value) -> Value {
        self.vars.insert(var_name.to_owned(), value.clone());
        value
    }

    /// resolve a name in the nearest frame that binds it
    pub fn lookup(&self, var_name: &str) -> Result<Value, Error> {
        match self.vars.get(var_name) {
            Some(x) => Ok(x.clone()),
            None => match &self.parent {
                Some(env) => env.borrow().lookup(var_name),
                None      => Err(RunError::NotDefined(var_name.to_owned()))?,
            },
        }
    }

    /// update an existing binding in the nearest frame that has one
    pub fn assign(&mut self, var_name: &str, value: Value) -> Result<Value, Error> {
        if let Some(slot) = self.vars.get_mut(var_name) {
            *slot = value.clone();
            return Ok(value);
        }

        match &self.parent {
            Some(env) => env.borrow_mut().assign(var_name, value),
            None      => Err(RunError::NotDefined(var_name.to_owned()))?,
        }
    }
}

// scopes can be reachable from their own bindings, so only names are shown
impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Env")
            .field("vars", &self.names())
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

// {{{ tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::Value::*;

    fn not_defined(err: Error) -> String {
        match err.downcast_ref::<RunError>() {
            Some(RunError::NotDefined(name)) => name.clone(),
            other => panic!("expected NotDefined, got {:?}", other),
        }
    }

    #[test]
    fn define_then_lookup() {
        let mut env = Env::new(None);
        assert_eq!(env.define("x", Number(10.0)), Number(10.0));
        assert_eq!(env.lookup("x").unwrap(), Number(10.0));

        env.define("x", Str("again".to_owned()));
        assert_eq!(env.lookup("x").unwrap(), Str("again".to_owned()));
    }

    #[test]
    fn lookup_walks_parents_and_children_shadow() {
        let mut root = Env::new(None);
        root.define("x", Number(1.0));
        root.define("y", Number(2.0));
        let root = root.into_ref();

        let mut child = Env::new(Some(root.clone()));
        child.define("x", Number(100.0));

        assert_eq!(child.lookup("x").unwrap(), Number(100.0));
        assert_eq!(child.lookup("y").unwrap(), Number(2.0));
        assert_eq!(root.borrow().lookup("x").unwrap(), Number(1.0));
    }

    #[test]
    fn lookup_of_unbound_name_fails() {
        let root = Env::new(None).into_ref();
        let child = Env::new(Some(root));
        assert_eq!(not_defined(child.lookup("nope").unwrap_err()), "nope");
    }

    #[test]
    fn assign_updates_only_the_closest_frame() {
        let mut root = Env::new(None);
        root.define("x", Number(1.0));
        let root = root.into_ref();

        let mut middle = Env::new(Some(root.clone()));
        middle.define("x", Number(2.0));
        let middle = middle.into_ref();

        let mut leaf = Env::new(Some(middle.clone()));
        assert_eq!(leaf.assign("x", Number(3.0)).unwrap(), Number(3.0));

        assert_eq!(middle.borrow().lookup("x").unwrap(), Number(3.0));
        assert_eq!(root.borrow().lookup("x").unwrap(), Number(1.0));
        assert!(leaf.names().is_empty());
    }

    #[test]
    fn assign_never_creates_a_binding() {
        let root = Env::new(None).into_ref();
        let mut child = Env::new(Some(root.clone()));

        assert_eq!(not_defined(child.assign("x", Number(1.0)).unwrap_err()), "x");
        assert!(child.names().is_empty());
        assert!(root.borrow().names().is_empty());
    }

    #[test]
    fn seeded_environment() {
        let mut vars = HashMap::new();
        vars.insert("a".to_owned(), Bool(true));
        let env = Env::with_vars(vars, None);
        assert_eq!(env.lookup("a").unwrap(), Bool(true));
        assert!(env.parent().is_none());
    }
}
// }}}
