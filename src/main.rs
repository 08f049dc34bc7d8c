use itertools::join;
use std::path::PathBuf;
use std::process;

use eva::log;
use eva::values::Value;
use eva::Interpreter;
use rustyline::error::ReadlineError;
use rustyline::Editor;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "eva", about = "a small lisp with closures and classes")]
struct Opt {
    #[structopt(short = "d", long = "debug", help = "log every evaluated form")]
    debug: bool,

    #[structopt(short = "e", long = "eval", help = "evaluate a program, print its value and exit")]
    eval: Option<String>,

    #[structopt(long = "no-repl", help = "exit after running the given files")]
    no_repl: bool,

    #[structopt(name = "FILE", parse(from_os_str), help = "eva files to run on startup")]
    files: Vec<PathBuf>,
}

const HISTFILE: &str = ".eva_hist";

fn main() {
    let opt = Opt::from_args();
    log::set_debug(opt.debug);
    log::debug(format!("set options: {:?}", opt));

    let interpreter = Interpreter::new();
    for file in &opt.files {
        if let Err(why) = interpreter.run_file(file) {
            log::warn(why);
        }
    }

    if let Some(code) = &opt.eval {
        match interpreter.run(code) {
            Ok(result) => println!("{}", result),
            Err(err) => {
                log::error(err);
                process::exit(1);
            }
        }
        return;
    }

    if !opt.no_repl {
        repl(&interpreter);
    }
}

fn repl(interpreter: &Interpreter) {
    let mut rl = Editor::<()>::new();
    if let Err(err) = rl.load_history(HISTFILE) {
        log::warn(format!("error opening history file: {}", err));
    }

    let prompt = format!("{}eva λ{} ", "\x1b[1;94m", log::RESET);

    loop {
        let input = rl.readline(&prompt);

        match input {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }

                rl.add_history_entry(line.as_str());
                if line.starts_with('>') && line.len() > 1 {
                    println!("{}", command(interpreter, line[1..].trim()));
                } else {
                    match interpreter.run(&line) {
                        Ok(Value::Unit) => {}
                        Ok(result) => println!("{}", result),
                        Err(err) => log::error(err),
                    }
                }
            }

            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }

            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }

            Err(err) => {
                log::error(err);
                break;
            }
        }
    }

    if let Err(err) = rl.save_history(HISTFILE) {
        log::warn(format!("error saving history file: {}", err));
    }
}

fn command(interpreter: &Interpreter, cmd: &str) -> String {
    match cmd {
        "env" => join(interpreter.global.borrow().names(), ", "),
        _ => "invalid command".to_owned(),
    }
}
