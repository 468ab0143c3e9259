use std::collections::HashMap;
use std::fmt;
use std::iter;

use tracing::debug;

use super::call::{CallContext, CallOutcome, CallSite};
use super::error::CallError;
use super::functions::Function;
use super::functions_impl::FunctionImpl;
use super::params::{bind, Signature};
use super::value::Value;

#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Register the builtin function set on construction.
    pub include_builtins: bool,
    /// Names removed from the registry after the builtins are registered.
    pub disabled_functions: Vec<String>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            include_builtins: true,
            disabled_functions: Vec::new(),
        }
    }
}

/// A registered function: canonical name, contract and handler.
#[derive(Clone, Copy)]
pub struct Entry {
    pub name: &'static str,
    pub signature: Signature,
    pub handler: FunctionImpl,
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// Function registry and dispatcher.
#[derive(Debug, Clone)]
pub struct Engine {
    functions: HashMap<String, Entry>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        let mut engine = Self {
            functions: HashMap::new(),
        };
        if options.include_builtins {
            for function in Function::all() {
                let names = iter::once(function.name()).chain(function.aliases().iter().copied());
                for name in names {
                    engine.register(name, function.signature(), function.handler());
                }
            }
        }
        for name in &options.disabled_functions {
            engine.unregister(name);
        }
        engine
    }

    /// Adds or replaces a function. Lookup ignores case.
    pub fn register(&mut self, name: &'static str, signature: Signature, handler: FunctionImpl) {
        self.functions.insert(
            name.to_ascii_lowercase(),
            Entry {
                name,
                signature,
                handler,
            },
        );
    }

    pub fn unregister(&mut self, name: &str) -> Option<Entry> {
        self.functions.remove(&name.to_ascii_lowercase())
    }

    pub fn lookup(&self, name: &str) -> Option<&Entry> {
        self.functions.get(&name.to_ascii_lowercase())
    }

    /// Registered functions sorted by name.
    pub fn entries(&self) -> Vec<&Entry> {
        let mut entries: Vec<&Entry> = self.functions.values().collect();
        entries.sort_by_key(|entry| entry.name.to_ascii_lowercase());
        entries
    }

    /// Binds `args` against the function's contract and runs its handler.
    pub fn call(
        &self,
        site: &CallSite<'_>,
        name: &str,
        args: Vec<Value>,
    ) -> Result<CallOutcome, CallError> {
        let entry = self.lookup(name).ok_or_else(|| {
            debug!(function = name, "unknown function");
            CallError::UnknownFunction(name.to_string())
        })?;
        debug!(function = entry.name, args = args.len(), "dispatching call");

        if !entry.signature.variadic && args.len() > entry.signature.params.len() {
            debug!(
                function = entry.name,
                ignored = args.len() - entry.signature.params.len(),
                "ignoring extra arguments"
            );
        }

        let bound = bind(&entry.signature, args).map_err(|error| {
            debug!(function = entry.name, %error, "argument binding failed");
            CallError::Binding {
                function: entry.name.to_string(),
                error,
            }
        })?;

        let mut ctx = CallContext::new(*site, entry.name);
        let value = (entry.handler)(&mut ctx, bound).map_err(|error| {
            debug!(function = entry.name, error = %error, "handler failed");
            CallError::Handler {
                function: entry.name.to_string(),
                error,
            }
        })?;

        Ok(CallOutcome {
            value,
            warning: ctx.into_warning(),
        })
    }
}
