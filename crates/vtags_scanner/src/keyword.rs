//! Declaration keyword classification.
//!
//! The keyword set is fixed at compile time and immutable: lookup is a pure
//! function, so concurrent scans over different files share it freely.

use crate::tag::TagKind;

/// Classifies identifier text as a declaration keyword.
///
/// Lookup is exact and case-sensitive. `` `define `` appears as a literal
/// entry (the backtick is an identifier character, so directives read as
/// ordinary identifiers). Text that matches no entry classifies as
/// [`TagKind::Undefined`].
pub fn lookup_keyword(text: &str) -> TagKind {
    match text {
        "`define" => TagKind::Constant,
        "event" => TagKind::Event,
        "function" => TagKind::Function,
        "inout" => TagKind::Port,
        "input" => TagKind::Port,
        "integer" => TagKind::Register,
        "module" => TagKind::Module,
        "output" => TagKind::Port,
        "parameter" => TagKind::Constant,
        "real" => TagKind::Register,
        "realtime" => TagKind::Register,
        "reg" => TagKind::Register,
        "specparam" => TagKind::Constant,
        "supply0" => TagKind::Net,
        "supply1" => TagKind::Net,
        "task" => TagKind::Task,
        "time" => TagKind::Register,
        "tri" => TagKind::Net,
        "tri0" => TagKind::Net,
        "tri1" => TagKind::Net,
        "triand" => TagKind::Net,
        "trior" => TagKind::Net,
        "trireg" => TagKind::Net,
        "wand" => TagKind::Net,
        "wire" => TagKind::Net,
        "wor" => TagKind::Net,
        _ => TagKind::Undefined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_keywords() {
        for kw in [
            "supply0", "supply1", "tri", "tri0", "tri1", "triand", "trior", "trireg", "wand",
            "wire", "wor",
        ] {
            assert_eq!(lookup_keyword(kw), TagKind::Net, "{kw}");
        }
    }

    #[test]
    fn register_keywords() {
        for kw in ["integer", "real", "realtime", "reg", "time"] {
            assert_eq!(lookup_keyword(kw), TagKind::Register, "{kw}");
        }
    }

    #[test]
    fn port_keywords() {
        for kw in ["inout", "input", "output"] {
            assert_eq!(lookup_keyword(kw), TagKind::Port, "{kw}");
        }
    }

    #[test]
    fn constant_keywords() {
        for kw in ["`define", "parameter", "specparam"] {
            assert_eq!(lookup_keyword(kw), TagKind::Constant, "{kw}");
        }
    }

    #[test]
    fn singleton_keywords() {
        assert_eq!(lookup_keyword("event"), TagKind::Event);
        assert_eq!(lookup_keyword("function"), TagKind::Function);
        assert_eq!(lookup_keyword("module"), TagKind::Module);
        assert_eq!(lookup_keyword("task"), TagKind::Task);
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(lookup_keyword("Wire"), TagKind::Undefined);
        assert_eq!(lookup_keyword("MODULE"), TagKind::Undefined);
    }

    #[test]
    fn unknown_is_undefined() {
        assert_eq!(lookup_keyword("assign"), TagKind::Undefined);
        assert_eq!(lookup_keyword("clk"), TagKind::Undefined);
        assert_eq!(lookup_keyword(""), TagKind::Undefined);
        assert_eq!(lookup_keyword("`timescale"), TagKind::Undefined);
    }
}
