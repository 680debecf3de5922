use super::LanguageRule;

const C_BLOCK: (&str, &str) = ("/*", "*/");
const HTML_BLOCK: (&str, &str) = ("<!--", "-->");

/// Rules compiled into the binary, used when no language file is supplied.
#[must_use]
pub fn builtin_rules() -> Vec<LanguageRule> {
    vec![
        LanguageRule::new("Rust", vec!["rs"], vec!["//"], vec![C_BLOCK]),
        LanguageRule::new("Go", vec!["go"], vec!["//"], vec![C_BLOCK]),
        LanguageRule::new(
            "Python",
            vec!["py", "pyi"],
            vec!["#"],
            vec![("\"\"\"", "\"\"\""), ("'''", "'''")],
        ),
        LanguageRule::new("Java", vec!["java"], vec!["//"], vec![C_BLOCK]),
        LanguageRule::new("Kotlin", vec!["kt", "kts"], vec!["//"], vec![C_BLOCK]),
        LanguageRule::new("Scala", vec!["scala", "sc"], vec!["//"], vec![C_BLOCK]),
        LanguageRule::new(
            "JavaScript",
            vec!["js", "cjs", "mjs", "jsx"],
            vec!["//"],
            vec![C_BLOCK],
        ),
        LanguageRule::new(
            "TypeScript",
            vec!["ts", "mts", "cts", "tsx"],
            vec!["//"],
            vec![C_BLOCK],
        ),
        LanguageRule::new("C", vec!["c", "h"], vec!["//"], vec![C_BLOCK]),
        LanguageRule::new(
            "C++",
            vec!["cpp", "hpp", "cc", "cxx", "hxx", "hh"],
            vec!["//"],
            vec![C_BLOCK],
        ),
        LanguageRule::new("C#", vec!["cs"], vec!["//"], vec![C_BLOCK]),
        LanguageRule::new("Swift", vec!["swift"], vec!["//"], vec![C_BLOCK]),
        LanguageRule::new("PHP", vec!["php"], vec!["//", "#"], vec![C_BLOCK]),
        LanguageRule::new("CSS", vec!["css"], vec![], vec![C_BLOCK]),
        LanguageRule::new("SCSS", vec!["scss", "sass"], vec!["//"], vec![C_BLOCK]),
        LanguageRule::new("HTML", vec!["html", "htm"], vec![], vec![HTML_BLOCK]),
        LanguageRule::new("XML", vec!["xml", "xsd", "svg"], vec![], vec![HTML_BLOCK]),
        LanguageRule::new("Markdown", vec!["md", "markdown"], vec![], vec![HTML_BLOCK]),
        LanguageRule::new("Shell", vec!["sh", "bash", "zsh"], vec!["#"], vec![]),
        LanguageRule::new("PowerShell", vec!["ps1", "psm1"], vec!["#"], vec![("<#", "#>")]),
        LanguageRule::new("Ruby", vec!["rb"], vec!["#"], vec![("=begin", "=end")]),
        LanguageRule::new("Perl", vec!["pl", "pm"], vec!["#"], vec![("=pod", "=cut")]),
        LanguageRule::new("Lua", vec!["lua"], vec!["--"], vec![("--[[", "]]")]),
        LanguageRule::new("SQL", vec!["sql"], vec!["--"], vec![C_BLOCK]),
        LanguageRule::new("Haskell", vec!["hs"], vec!["--"], vec![("{-", "-}")]),
        LanguageRule::new("Elixir", vec!["ex", "exs"], vec!["#"], vec![]),
        LanguageRule::new("Erlang", vec!["erl", "hrl"], vec!["%"], vec![]),
        LanguageRule::new("Clojure", vec!["clj", "cljs", "cljc"], vec![";"], vec![]),
        LanguageRule::new("YAML", vec!["yaml", "yml"], vec!["#"], vec![]),
        LanguageRule::new("TOML", vec!["toml"], vec!["#"], vec![]),
        LanguageRule::new("JSON", vec!["json"], vec![], vec![]),
        LanguageRule::new("Makefile", vec!["mk", "mak"], vec!["#"], vec![]),
        LanguageRule::new("Batch", vec!["bat", "cmd"], vec!["REM", "::"], vec![]),
        LanguageRule::plain_text(),
    ]
}
