use indexmap::IndexMap;

use super::PhpError;
use super::parser::{Expr, Stmt, StmtKind, Target};
use super::value::{ArrayKey, PhpArray, PhpValue};

enum Flow {
    Continue,
    Exit,
}

/// Walks parsed statements with an isolated variable scope.
///
/// Nothing reaches outside the evaluator: the only observable results are
/// the variables left in scope and the text that would have been printed.
pub struct Evaluator<'c> {
    constants: &'c [&'c str],
    vars: IndexMap<String, PhpValue>,
    output: String,
}

impl<'c> Evaluator<'c> {
    /// `constants` are the names `defined()` reports as defined.
    #[must_use]
    pub fn new(constants: &'c [&'c str]) -> Self {
        Self {
            constants,
            vars: IndexMap::new(),
            output: String::new(),
        }
    }

    /// Run the program and return the final scope and captured output.
    ///
    /// # Errors
    /// Returns an error for runtime faults such as unsupported calls or
    /// writing into a scalar.
    pub fn run(
        mut self,
        program: &[Stmt],
    ) -> Result<(IndexMap<String, PhpValue>, String), PhpError> {
        self.run_block(program)?;
        Ok((self.vars, self.output))
    }

    fn run_block(&mut self, stmts: &[Stmt]) -> Result<Flow, PhpError> {
        for stmt in stmts {
            if let Flow::Exit = self.exec(stmt)? {
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn exec(&mut self, stmt: &Stmt) -> Result<Flow, PhpError> {
        let line = stmt.line;
        match &stmt.kind {
            StmtKind::Assign(target, expr) => {
                let value = self.eval(expr, line)?;
                self.assign(target, value, line)?;
            }
            StmtKind::If {
                branches,
                otherwise,
            } => {
                for (condition, body) in branches {
                    if self.eval(condition, line)?.is_truthy() {
                        return self.run_block(body);
                    }
                }
                if let Some(body) = otherwise {
                    return self.run_block(body);
                }
            }
            StmtKind::Echo(exprs) => {
                for expr in exprs {
                    let text = self.eval(expr, line)?.to_php_string();
                    self.output.push_str(&text);
                }
            }
            StmtKind::InlineHtml(text) => self.output.push_str(text),
            StmtKind::Unset(targets) => {
                for target in targets {
                    self.unset(target, line)?;
                }
            }
            StmtKind::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn eval_keys(
        &self,
        target: &Target,
        line: usize,
    ) -> Result<Vec<Option<ArrayKey>>, PhpError> {
        target
            .path
            .iter()
            .map(|index| {
                index
                    .as_ref()
                    .map(|expr| self.eval_key(expr, line))
                    .transpose()
            })
            .collect()
    }

    fn eval_key(&self, expr: &Expr, line: usize) -> Result<ArrayKey, PhpError> {
        let value = self.eval(expr, line)?;
        ArrayKey::from_value(&value).ok_or_else(|| PhpError::new(line, "illegal offset type"))
    }

    fn assign(&mut self, target: &Target, value: PhpValue, line: usize) -> Result<(), PhpError> {
        let keys = self.eval_keys(target, line)?;
        let slot = self
            .vars
            .entry(target.name.clone())
            .or_insert(PhpValue::Null);
        store(slot, &keys, value, line)
    }

    fn unset(&mut self, target: &Target, line: usize) -> Result<(), PhpError> {
        let mut keys = self.eval_keys(target, line)?;
        let Some(last) = keys.pop() else {
            self.vars.shift_remove(&target.name);
            return Ok(());
        };
        let Some(last) = last else {
            return Err(PhpError::new(line, "cannot use [] for unsetting"));
        };

        let mut slot = self.vars.get_mut(&target.name);
        for key in keys {
            let Some(key) = key else {
                return Err(PhpError::new(line, "cannot use [] for unsetting"));
            };
            slot = match slot {
                Some(PhpValue::Array(array)) => array.get_mut(&key),
                _ => None,
            };
        }
        if let Some(PhpValue::Array(array)) = slot {
            array.remove(&last);
        }
        Ok(())
    }

    fn eval(&self, expr: &Expr, line: usize) -> Result<PhpValue, PhpError> {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Array(items) => {
                let mut array = PhpArray::new();
                for item in items {
                    let value = self.eval(&item.value, line)?;
                    match &item.key {
                        Some(key) => array.insert(self.eval_key(key, line)?, value),
                        None => array.push(value),
                    }
                }
                Ok(PhpValue::Array(array))
            }
            Expr::Variable(name) => Ok(self.vars.get(name).cloned().unwrap_or(PhpValue::Null)),
            Expr::Index(base, index) => {
                let base = self.eval(base, line)?;
                let key = self.eval_key(index, line)?;
                Ok(base
                    .as_array()
                    .and_then(|array| array.get(&key))
                    .cloned()
                    .unwrap_or(PhpValue::Null))
            }
            Expr::Constant(name) => {
                if self.constants.contains(&name.as_str()) {
                    Ok(PhpValue::Bool(true))
                } else {
                    Err(PhpError::new(line, format!("undefined constant '{name}'")))
                }
            }
            Expr::Call(name, args) => self.call(name, args, line),
            Expr::Not(inner) => Ok(PhpValue::Bool(!self.eval(inner, line)?.is_truthy())),
            Expr::Neg(inner) => match self.eval(inner, line)? {
                PhpValue::Int(n) => Ok(PhpValue::Int(n.wrapping_neg())),
                PhpValue::Float(f) => Ok(PhpValue::Float(-f)),
                other => Err(PhpError::new(
                    line,
                    format!("cannot negate a value of type {}", other.type_name()),
                )),
            },
            Expr::And(left, right) => Ok(PhpValue::Bool(
                self.eval(left, line)?.is_truthy() && self.eval(right, line)?.is_truthy(),
            )),
            Expr::Or(left, right) => Ok(PhpValue::Bool(
                self.eval(left, line)?.is_truthy() || self.eval(right, line)?.is_truthy(),
            )),
            Expr::Concat(left, right) => {
                let mut text = self.eval(left, line)?.to_php_string();
                text.push_str(&self.eval(right, line)?.to_php_string());
                Ok(PhpValue::Str(text))
            }
        }
    }

    fn call(&self, name: &str, args: &[Expr], line: usize) -> Result<PhpValue, PhpError> {
        let arity = |expected: usize| {
            if args.len() == expected {
                Ok(())
            } else {
                Err(PhpError::new(
                    line,
                    format!("{name}() expects {expected} argument(s), {} given", args.len()),
                ))
            }
        };

        match name {
            "defined" => {
                arity(1)?;
                let constant = self.eval(&args[0], line)?.to_php_string();
                Ok(PhpValue::Bool(self.constants.contains(&constant.as_str())))
            }
            "empty" => {
                arity(1)?;
                Ok(PhpValue::Bool(!self.eval(&args[0], line)?.is_truthy()))
            }
            "isset" => {
                for arg in args {
                    if self.eval(arg, line)?.is_null() {
                        return Ok(PhpValue::Bool(false));
                    }
                }
                Ok(PhpValue::Bool(!args.is_empty()))
            }
            "is_array" => {
                arity(1)?;
                Ok(PhpValue::Bool(self.eval(&args[0], line)?.as_array().is_some()))
            }
            "is_string" => {
                arity(1)?;
                Ok(PhpValue::Bool(self.eval(&args[0], line)?.as_str().is_some()))
            }
            "count" | "sizeof" => {
                arity(1)?;
                match self.eval(&args[0], line)? {
                    PhpValue::Array(array) => {
                        Ok(PhpValue::Int(i64::try_from(array.len()).unwrap_or(i64::MAX)))
                    }
                    other => Err(PhpError::new(
                        line,
                        format!("{name}() expects an array, {} given", other.type_name()),
                    )),
                }
            }
            "array_merge" => {
                let mut merged = PhpArray::new();
                for (i, arg) in args.iter().enumerate() {
                    match self.eval(arg, line)? {
                        PhpValue::Array(array) => merged.merge(&array),
                        other => {
                            return Err(PhpError::new(
                                line,
                                format!(
                                    "array_merge(): argument #{} must be of type array, {} given",
                                    i + 1,
                                    other.type_name()
                                ),
                            ));
                        }
                    }
                }
                Ok(PhpValue::Array(merged))
            }
            _ => Err(PhpError::new(
                line,
                format!("call to unsupported function {name}()"),
            )),
        }
    }
}

fn store(
    slot: &mut PhpValue,
    keys: &[Option<ArrayKey>],
    value: PhpValue,
    line: usize,
) -> Result<(), PhpError> {
    let Some((key, rest)) = keys.split_first() else {
        *slot = value;
        return Ok(());
    };
    if slot.is_null() {
        *slot = PhpValue::Array(PhpArray::new());
    }
    match slot {
        PhpValue::Array(array) => store(array.slot_mut(key.clone()), rest, value, line),
        other => Err(PhpError::new(
            line,
            format!("cannot use a {} as an array", other.type_name()),
        )),
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;
