//! The `explain` command: describe a diagnostic code.

use loxt_diagnostic::ErrorCode;

/// One-paragraph explanation for `code`, or `None` if it is not a code.
pub fn explanation(code: &str) -> Option<String> {
    let code = ErrorCode::from_str_opt(&code.to_ascii_uppercase())?;
    let phase = if code.is_lexer_error() {
        "lexer"
    } else {
        "parser"
    };
    Some(format!(
        "{code}: {} ({phase} error)\n\n{}",
        code.description(),
        details(code)
    ))
}

/// Print the explanation for `code_str`, or exit with a message.
pub fn explain_error(code_str: &str) {
    let Some(text) = explanation(code_str) else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        let known: Vec<_> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
        eprintln!("Known codes: {}", known.join(", "));
        std::process::exit(1);
    };
    println!("{text}");
}

fn details(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::E0001 => {
            "A string literal was opened with `\"` but the file ended before the \
             closing `\"`. Strings may span lines, so the missing quote can be far \
             from where the string starts."
        }
        ErrorCode::E0002 => {
            "The character does not begin any token. Identifiers use ASCII letters, \
             digits and `_`; everything else must be an operator or punctuation."
        }
        ErrorCode::E0003 => {
            "Number literals are unsigned 64-bit integers. The literal has more \
             digits than fit."
        }
        ErrorCode::E1001 => {
            "A complete expression was parsed but more tokens follow it. The input \
             holds exactly one expression."
        }
        ErrorCode::E1002 => {
            "An operand was required here: a number, a string, `true`, `false`, \
             `nil`, a parenthesized expression, or a unary operator applied to one."
        }
        ErrorCode::E1003 => {
            "A `(` was opened and the expression inside it ended without a matching \
             `)`."
        }
    }
}
