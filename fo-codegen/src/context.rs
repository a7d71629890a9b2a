// Resolved fact set shared by the C++ and Rust generators.

use fo_layout_facts::{r476, Applicability, BuildTarget, LayoutFact};

use crate::config::{FixtureConfig, LayoutEntry};
use crate::error::{CodegenError, CodegenResult};
use crate::naming;

/// One validated fact, with the Rust mirror it is checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFact {
    pub type_name: String,
    pub size: usize,
    pub applies: Applicability,
    pub rust_path: String,
}

impl ResolvedFact {
    pub fn as_fact(&self) -> LayoutFact<'_> {
        LayoutFact { type_name: &self.type_name, size: self.size, applies: self.applies }
    }
}

/// Everything the generators need, validated once.
pub struct FixtureContext<'c> {
    pub config: &'c FixtureConfig,
    pub facts: Vec<ResolvedFact>,
}

impl<'c> FixtureContext<'c> {
    pub fn new(config: &'c FixtureConfig) -> CodegenResult<Self> {
        validate_header_tokens(config)?;
        let facts = if config.layouts.is_empty() {
            builtin_facts(&config.fixture.revision)?
        } else {
            config.layouts.iter().map(resolve_entry).collect::<CodegenResult<Vec<_>>>()?
        };
        validate(&facts)?;
        Ok(FixtureContext { config, facts })
    }

    /// Borrowed view for `fo_layout_facts::check`.
    pub fn layout_facts(&self) -> Vec<LayoutFact<'_>> {
        self.facts.iter().map(ResolvedFact::as_fact).collect()
    }

    /// Facts checked on every target, in table order.
    pub fn shared(&self) -> impl Iterator<Item = &ResolvedFact> {
        self.facts.iter().filter(|f| f.applies == Applicability::All)
    }

    /// Facts checked only on `target`, in table order.
    pub fn only(&self, target: BuildTarget) -> impl Iterator<Item = &ResolvedFact> {
        self.facts.iter().filter(move |f| f.applies == Applicability::Only(target))
    }
}

fn resolve_entry(entry: &LayoutEntry) -> CodegenResult<ResolvedFact> {
    let applies = Applicability::from(entry.target);
    let rust_path = match &entry.rust {
        Some(path) => path.clone(),
        None => {
            let derived = naming::rust_mirror_path(&entry.type_name, applies);
            if !naming::is_plain_rust_path(&derived) {
                return Err(CodegenError::InvalidFacts(format!(
                    "`{}` has no plain Rust mirror path; set `rust = \"...\"` for it",
                    entry.type_name
                )));
            }
            derived
        }
    };
    Ok(ResolvedFact {
        type_name: entry.type_name.clone(),
        size: entry.size,
        applies,
        rust_path,
    })
}

/// Reject config values that would be spliced into the header verbatim
/// but cannot appear there.
fn validate_header_tokens(config: &FixtureConfig) -> CodegenResult<()> {
    let fixture = &config.fixture;
    let invalid = |what: &str, value: &str| {
        Err(CodegenError::InvalidFacts(format!("{what} `{}` is not allowed", value.escape_debug())))
    };
    if !naming::is_c_identifier(&fixture.assert_fn) {
        return invalid("assert_fn", &fixture.assert_fn);
    }
    if !naming::is_c_identifier(&fixture.assert_macro) {
        return invalid("assert_macro", &fixture.assert_macro);
    }
    if !naming::is_include_path(&fixture.name) || fixture.name.contains('/') {
        return invalid("fixture name", &fixture.name);
    }
    if let Some(include) = fixture.includes.iter().find(|i| !naming::is_include_path(i)) {
        return invalid("include", include);
    }
    if let Some(warning) = config.diagnostics.suppress.iter().find(|w| !naming::is_warning_name(w)) {
        return invalid("suppressed warning", warning);
    }
    Ok(())
}

fn builtin_facts(revision: &str) -> CodegenResult<Vec<ResolvedFact>> {
    if revision != r476::REVISION {
        return Err(CodegenError::InvalidFacts(format!(
            "no built-in layout table for revision `{revision}`; add [[layout]] entries"
        )));
    }
    Ok(r476::FACTS
        .iter()
        .map(|f| ResolvedFact {
            type_name: f.type_name.to_string(),
            size: f.size,
            applies: f.applies,
            rust_path: naming::rust_mirror_path(f.type_name, f.applies),
        })
        .collect())
}

/// Reject facts the generators cannot express unambiguously.
fn validate(facts: &[ResolvedFact]) -> CodegenResult<()> {
    if facts.is_empty() {
        return Err(CodegenError::InvalidFacts("layout table is empty".into()));
    }
    for (i, fact) in facts.iter().enumerate() {
        if !naming::is_engine_type_name(&fact.type_name) {
            return Err(CodegenError::InvalidFacts(format!(
                "`{}` is not a C++ type name",
                fact.type_name
            )));
        }
        if fact.size == 0 {
            return Err(CodegenError::InvalidFacts(format!(
                "`{}` has zero size",
                fact.type_name
            )));
        }
        // Two checks for one type on the same target would contradict or
        // duplicate each other.
        if let Some(prev) = facts[..i]
            .iter()
            .find(|p| p.type_name == fact.type_name && p.applies.overlaps(fact.applies))
        {
            return Err(CodegenError::InvalidFacts(format!(
                "`{}` listed for {} and again for {}",
                fact.type_name,
                prev.applies.name(),
                fact.applies.name()
            )));
        }
    }
    Ok(())
}
