//! Rules shared by the classifier and detector tests.

use crate::language::LanguageRule;

/// `//` line comments and `/* */` blocks, the reference text rule.
pub fn text_rule() -> LanguageRule {
    LanguageRule::new("txt", vec!["txt"], vec!["//"], vec![("/*", "*/")])
}

pub fn sql_rule() -> LanguageRule {
    LanguageRule::new("sql", vec!["sql"], vec!["--"], vec![])
}

/// Two line markers and two block pairs, for checking marker policies.
pub fn python_rule() -> LanguageRule {
    LanguageRule::new(
        "Python",
        vec!["py"],
        vec!["#", "//"],
        vec![("\"\"\"", "\"\"\""), ("'''", "'''")],
    )
}

pub fn no_comment_rule() -> LanguageRule {
    LanguageRule::new("Data", vec!["dat"], vec![], vec![])
}
