//! Display-ready handle around a rounded result.

use core::fmt;
use std::sync::Arc;

use rw_round::RoundedResult;

/// What `res` hands back: a shared, immutable rounded result that knows how
/// to render itself as plain text or LaTeX.
#[derive(Debug, Clone)]
pub struct PrintableResult {
    result: Arc<RoundedResult>,
}

impl PrintableResult {
    pub fn new(result: Arc<RoundedResult>) -> Self {
        Self { result }
    }

    pub fn result(&self) -> &RoundedResult {
        &self.result
    }

    pub fn name(&self) -> &str {
        self.result.name()
    }

    /// The result with all components collapsed into the total.
    pub fn short(&self) -> Self {
        Self::new(Arc::new(self.result.short()))
    }

    /// LaTeX control sequence this result is exported under, e.g. `\resG`.
    pub fn command_name(&self) -> String {
        let mut chars = self.name().chars();
        let mut out = String::from("\\res");
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
        out
    }

    /// siunitx markup for the number (and unit, if any).
    pub fn to_latex(&self) -> String {
        let r = &*self.result;
        let value = r.value_text();
        let texts = r.uncertainty_texts();
        let unit = r.unit();

        match texts.as_slice() {
            [] => siunitx(&value, unit),
            [(u, "")] => siunitx(&format!("{value} \\pm {u}"), unit),
            _ => {
                let mut body = format!("\\num{{{value}}}");
                for (u, label) in &texts {
                    body.push_str(&format!(" \\pm \\num{{{u}}}"));
                    if !label.is_empty() {
                        body.push_str(&format!("_{{\\text{{{label}}}}}"));
                    }
                }
                if unit.is_empty() {
                    body
                } else {
                    format!("\\left({body}\\right)\\,\\unit{{{unit}}}")
                }
            }
        }
    }

    /// `\newcommand*{\resName}{...}` defining this result.
    pub fn to_latex_command(&self) -> String {
        format!(
            "\\newcommand*{{{}}}{{{}}}",
            self.command_name(),
            self.to_latex()
        )
    }
}

fn siunitx(body: &str, unit: &str) -> String {
    if unit.is_empty() {
        format!("\\num{{{body}}}")
    } else {
        format!("\\qty{{{body}}}{{{unit}}}")
    }
}

impl fmt::Display for PrintableResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.result.value_text())?;
        for (u, label) in self.result.uncertainty_texts() {
            write!(f, " ± {u}")?;
            if !label.is_empty() {
                write!(f, " ({label})")?;
            }
        }
        if !self.result.unit().is_empty() {
            write!(f, " {}", self.result.unit())?;
        }
        Ok(())
    }
}
