//! One source file and the stages run over it.

use std::fs::File;
use std::io::Read;
use std::time::Instant;

use tracing::debug;
use tun_eval::{Bindings, InterpreterBuilder};
use tun_ir::{Program, StringInterner};
use tun_lexer::LexOutput;

use crate::{CompileError, Options};

/// Source text plus the interner every stage shares.
pub struct Session {
    path: String,
    source: String,
    interner: StringInterner,
}

impl Session {
    pub fn new(path: impl Into<String>, source: impl Into<String>) -> Self {
        Session {
            path: path.into(),
            source: source.into(),
            interner: StringInterner::new(),
        }
    }

    /// Open and read a source file. Opening and reading fail separately.
    pub fn from_path(path: &str) -> Result<Self, CompileError> {
        let mut file = File::open(path).map_err(|source| CompileError::Open {
            path: path.to_string(),
            source,
        })?;
        let mut source = String::new();
        file.read_to_string(&mut source)
            .map_err(CompileError::Read)?;
        Ok(Session::new(path, source))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Scan the source. Any malformed run fails the stage.
    pub fn lex(&self) -> Result<LexOutput, CompileError> {
        let output = self.tokens();
        if let Some(error) = CompileError::from_lex_errors(&output.errors) {
            return Err(error);
        }
        Ok(output)
    }

    /// Scan the source, keeping malformed runs as `ERROR` tokens.
    pub fn tokens(&self) -> LexOutput {
        let start = Instant::now();
        let output = tun_lexer::lex(&self.source, &self.interner);
        debug!(
            tokens = output.tokens.len(),
            errors = output.errors.len(),
            elapsed = ?start.elapsed(),
            "lexed"
        );
        output
    }

    pub fn parse(&self) -> Result<Program, CompileError> {
        let output = self.lex()?;
        let start = Instant::now();
        let program = tun_parse::parse(&output.tokens, &self.interner)?;
        debug!(
            statements = program.statements().count(),
            nodes.stmts = program.arena.stmt_count(),
            nodes.exprs = program.arena.expr_count(),
            elapsed = ?start.elapsed(),
            "parsed"
        );
        Ok(program)
    }

    pub fn check(&self, program: &Program) -> Result<(), CompileError> {
        let start = Instant::now();
        tun_resolve::check(program, &self.interner)?;
        debug!(elapsed = ?start.elapsed(), "checked");
        Ok(())
    }

    /// Evaluate an already checked (or deliberately unchecked) program.
    pub fn execute(&self, program: &Program, options: &Options) -> Result<Bindings, CompileError> {
        let start = Instant::now();
        let bindings = InterpreterBuilder::new(&self.interner, &program.arena)
            .arity(options.arity)
            .max_call_depth(options.max_call_depth)
            .build()
            .run(program)?;
        debug!(bindings = bindings.len(), elapsed = ?start.elapsed(), "executed");
        Ok(bindings)
    }

    /// Parse, check unless `options.skip_check`, and run.
    pub fn run(&self, options: &Options) -> Result<(Program, Bindings), CompileError> {
        let program = self.parse()?;
        if options.skip_check {
            debug!("scope check skipped");
        } else {
            self.check(&program)?;
        }
        let bindings = self.execute(&program, options)?;
        Ok((program, bindings))
    }
}
