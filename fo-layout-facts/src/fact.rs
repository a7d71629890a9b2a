// Layout fact types.

use crate::target::BuildTarget;

/// Build targets a fact is checked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Applicability {
    /// Same size on every target.
    All,
    /// Only checked when compiling for this target.
    Only(BuildTarget),
}

impl Applicability {
    pub const fn applies_to(self, target: BuildTarget) -> bool {
        match self {
            Applicability::All => true,
            Applicability::Only(only) => only as u8 == target as u8,
        }
    }

    /// Whether some target is covered by both `self` and `other`.
    pub const fn overlaps(self, other: Applicability) -> bool {
        match (self, other) {
            (Applicability::All, _) | (_, Applicability::All) => true,
            (Applicability::Only(a), Applicability::Only(b)) => a as u8 == b as u8,
        }
    }

    /// `"all"`, `"server"` or `"client"`.
    pub const fn name(self) -> &'static str {
        match self {
            Applicability::All => "all",
            Applicability::Only(target) => target.name(),
        }
    }
}

/// Expected size of one engine type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutFact<'a> {
    /// Engine (C++) spelling of the type, e.g. `ScriptString`.
    pub type_name: &'a str,
    /// Expected `sizeof`, in bytes.
    pub size: usize,
    pub applies: Applicability,
}

impl<'a> LayoutFact<'a> {
    pub const fn all(type_name: &'a str, size: usize) -> Self {
        LayoutFact { type_name, size, applies: Applicability::All }
    }

    pub const fn only(target: BuildTarget, type_name: &'a str, size: usize) -> Self {
        LayoutFact { type_name, size, applies: Applicability::Only(target) }
    }
}

/// Size a compiled mirror actually has.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeasuredLayout<'a> {
    pub type_name: &'a str,
    pub size: usize,
}

/// Facts from `table` that apply to `target`, in table order.
pub fn facts_for<'t, 'a>(
    table: &'t [LayoutFact<'a>],
    target: BuildTarget,
) -> impl Iterator<Item = &'t LayoutFact<'a>> {
    table.iter().filter(move |f| f.applies.applies_to(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_applies_everywhere() {
        for target in BuildTarget::ALL {
            assert!(Applicability::All.applies_to(target));
        }
    }

    #[test]
    fn only_applies_to_its_target() {
        let server = Applicability::Only(BuildTarget::Server);
        assert!(server.applies_to(BuildTarget::Server));
        assert!(!server.applies_to(BuildTarget::Client));
    }

    #[test]
    fn overlap_rules() {
        let server = Applicability::Only(BuildTarget::Server);
        let client = Applicability::Only(BuildTarget::Client);
        assert!(Applicability::All.overlaps(server));
        assert!(client.overlaps(Applicability::All));
        assert!(server.overlaps(server));
        assert!(!server.overlaps(client));
    }

    #[test]
    fn facts_for_keeps_table_order() {
        let table = [
            LayoutFact::all("A", 4),
            LayoutFact::only(BuildTarget::Client, "B", 8),
            LayoutFact::only(BuildTarget::Server, "B", 12),
            LayoutFact::all("C", 16),
        ];
        let names: Vec<_> = facts_for(&table, BuildTarget::Server)
            .map(|f| (f.type_name, f.size))
            .collect();
        assert_eq!(names, [("A", 4), ("B", 12), ("C", 16)]);
    }
}
