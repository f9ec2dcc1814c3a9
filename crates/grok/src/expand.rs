//! Expand: rewrite grok references into a plain regex.
//!
//! Expansion is a fixed-point loop over textual rewriting. Each round
//! replaces every reference in the current text with its library fragment:
//!
//! - `%{NAME:field}` becomes `(?P<field>FRAGMENT)`
//! - `%{NAME}` becomes `(?:FRAGMENT)`
//!
//! References inside a fragment are picked up by the next round. The
//! reachable references are checked for unknown names and cycles before the
//! first round, so the loop always terminates.

use std::collections::HashSet;

use patterns::PatternLibrary;

use crate::error::{GrokError, GrokResult};
use crate::reference::{scan, Reference};
use crate::types::{TypeMap, TypeMapper};

/// Output of a successful expansion.
#[derive(Debug, Clone)]
pub struct Expansion {
    /// The fully expanded regular expression.
    pub pattern: String,
    pub type_map: TypeMap,
    /// Number of rewriting rounds performed.
    pub rounds: usize,
}

pub fn expand(expression: &str, library: &PatternLibrary, auto_map: bool) -> GrokResult<Expansion> {
    check_references(expression, library)?;

    let mut mapper = TypeMapper::new(auto_map);
    let mut current = expression.to_string();
    let mut rounds = 0;

    loop {
        let next = {
            let references = scan(&current);
            if references.is_empty() {
                break;
            }
            rounds += 1;
            mapper.observe(&references);
            tracing::trace!(round = rounds, references = references.len(), "expansion round");
            substitute(&current, &references, library)?
        };
        current = next;
    }

    tracing::debug!(
        expression,
        rounds,
        expanded_len = current.len(),
        "expanded grok expression"
    );

    Ok(Expansion {
        pattern: current,
        type_map: mapper.finish(),
        rounds,
    })
}

fn resolve<'a>(library: &'a PatternLibrary, name: &str) -> GrokResult<&'a str> {
    library.get(name).ok_or_else(|| GrokError::UnknownPattern {
        name: name.to_string(),
    })
}

fn substitute(text: &str, references: &[Reference<'_>], library: &PatternLibrary) -> GrokResult<String> {
    let mut out = String::with_capacity(text.len() * 2);
    let mut last = 0;

    for reference in references {
        let fragment = resolve(library, reference.pattern)?;
        out.push_str(&text[last..reference.span.start]);
        match reference.binding {
            Some(binding) => {
                out.push_str("(?P<");
                out.push_str(binding);
                out.push('>');
            }
            None => out.push_str("(?:"),
        }
        out.push_str(fragment);
        out.push(')');
        last = reference.span.end;
    }
    out.push_str(&text[last..]);

    Ok(out)
}

/// Walk every reference reachable from `expression` depth-first, failing on
/// the first unknown name or cycle.
fn check_references<'a>(expression: &'a str, library: &'a PatternLibrary) -> GrokResult<()> {
    let mut done: HashSet<&'a str> = HashSet::new();
    let mut stack: Vec<&'a str> = Vec::new();

    for reference in scan(expression) {
        visit(reference.pattern, library, &mut stack, &mut done)?;
    }
    Ok(())
}

fn visit<'a>(
    name: &'a str,
    library: &'a PatternLibrary,
    stack: &mut Vec<&'a str>,
    done: &mut HashSet<&'a str>,
) -> GrokResult<()> {
    if done.contains(name) {
        return Ok(());
    }
    if let Some(pos) = stack.iter().position(|n| *n == name) {
        let mut chain = stack[pos..].to_vec();
        chain.push(name);
        return Err(GrokError::RecursivePattern {
            chain: chain.join(" -> "),
        });
    }

    let fragment = resolve(library, name)?;
    stack.push(name);
    for reference in scan(fragment) {
        visit(reference.pattern, library, stack, done)?;
    }
    stack.pop();
    done.insert(name);
    Ok(())
}
