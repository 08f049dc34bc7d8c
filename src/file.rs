use failure::Error;

use std::fmt::Debug;
use std::fs;
use std::path::Path;

use crate::log;
use crate::parser;
use crate::Interpreter;

impl Interpreter {
    /// run every top-level form of a file in the global environment; a form
    /// that fails is reported and the rest still run
    pub fn run_file<P>(&self, path: P) -> Result<(), Error>
        where P: AsRef<Path> + Debug
    {
        log::info(format!("running {:?}...", path));

        let code = fs::read_to_string(&path)?;
        let program = parser::parse(&code)?;

        let mut failures = 0;
        for exp in &program {
            if let Err(err) = self.eval_global(exp) {
                failures += 1;
                log::warn("an error ocurred:");
                log::warn(exp);
                log::warn(err);
            }
        }

        log::info(format!("run_file: done ({} forms, {} failed)", program.len(), failures));
        Ok(())
    }
}

// {{{ tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::Value;
    use std::env;
    use std::process;

    fn script(name: &str, code: &str) -> std::path::PathBuf {
        let path = env::temp_dir().join(format!("eva-{}-{}.eva", name, process::id()));
        fs::write(&path, code).unwrap();
        path
    }

    #[test]
    fn runs_every_form_and_skips_failures() {
        let path = script("skip", "
            ; a failing form does not stop the script
            (var a 1)
            (set missing 2)
            (var b (+ a 1))
        ");

        let interpreter = Interpreter::new();
        interpreter.run_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(interpreter.run("b").unwrap(), Value::Number(2.0));
    }

    #[test]
    fn unreadable_scripts_are_errors() {
        let interpreter = Interpreter::new();
        assert!(interpreter.run_file("/definitely/not/here.eva").is_err());

        let path = script("parens", "(var a (+ 1 2)");
        assert!(interpreter.run_file(&path).is_err());
        fs::remove_file(&path).unwrap();
    }
}
// }}}
