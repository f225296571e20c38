//! CSS-level checks for token values, built on `cssparser`.

use cssparser::{ParseError, Parser, ParserInput, Token};

/// Returns true if `value` is one CSS value token: a dimension, number,
/// percentage, keyword, or a function such as `calc(...)`.
pub(crate) fn is_length_like(value: &str) -> bool {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);

    let first = parser.next().cloned();
    let ok = match first {
        Ok(Token::Dimension { .. })
        | Ok(Token::Number { .. })
        | Ok(Token::Percentage { .. })
        | Ok(Token::Ident(_)) => true,
        Ok(Token::Function(_)) => parser
            .parse_nested_block(|block| {
                while block.next().is_ok() {}
                Ok::<(), ParseError<'_, ()>>(())
            })
            .is_ok(),
        _ => false,
    };

    ok && parser.expect_exhausted().is_ok()
}

/// Returns true if `condition` is a single media feature, `name: value`.
pub(crate) fn is_media_feature(condition: &str) -> bool {
    let mut input = ParserInput::new(condition);
    let mut parser = Parser::new(&mut input);

    if parser.expect_ident().is_err() || parser.expect_colon().is_err() {
        return false;
    }
    let value = parser.next().cloned();
    let value_ok = matches!(
        value,
        Ok(Token::Dimension { .. })
            | Ok(Token::Number { .. })
            | Ok(Token::Percentage { .. })
            | Ok(Token::Ident(_))
    );

    value_ok && parser.expect_exhausted().is_ok()
}
