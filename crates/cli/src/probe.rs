use anyhow::{Context, Result};
use serde::Serialize;
use shortopt::{OptionList, ShortOption, make_printable, parse_options};
use std::cell::RefCell;

#[derive(Debug, Serialize)]
pub struct ProbeReport {
    /// Options whose callbacks ran, in invocation order.
    pub seen: Vec<char>,
    /// Index of the first argument not consumed as a flag.
    pub cursor: usize,
    pub rest: Vec<String>,
}

impl ProbeReport {
    pub fn render_text(&self) -> String {
        let seen: String = self
            .seen
            .iter()
            .map(|c| format!(" {}", make_printable(*c)))
            .collect();
        let rest: String = self.rest.iter().map(|a| format!(" {a}")).collect();
        format!("seen:{seen}\nrest:{rest}\n")
    }
}

/// Register `continuing` and `stopping` as options and parse `args` with them.
///
/// Every callback records its name; callbacks for `stopping` also end parsing.
pub fn probe(continuing: &str, stopping: &str, args: &[String]) -> Result<ProbeReport> {
    let seen = RefCell::new(Vec::new());
    let mut options = OptionList::new();

    for (names, keep_going) in [(continuing, true), (stopping, false)] {
        for name in names.chars() {
            let seen = &seen;
            options
                .add(ShortOption::new(name, move || {
                    seen.borrow_mut().push(name);
                    keep_going
                }))
                .with_context(|| {
                    format!("failed to register option '-{}'", make_printable(name))
                })?;
        }
    }
    tracing::debug!(count = options.len(), "registered options");

    let cursor = parse_options(args, &mut options)?;
    drop(options);

    Ok(ProbeReport {
        seen: seen.into_inner(),
        cursor,
        rest: args[cursor..].to_vec(),
    })
}
