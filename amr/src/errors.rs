// Create the Error, ErrorKind, ResultExt, and Result types
error_chain! {
    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        EmptyInput {
            description("empty AMR")
            display("empty AMR, expected `(`")
        }
        UnexpectedEnd(expected: String) {
            description("unexpected end of AMR")
            display("unexpected end of AMR, expected {}", expected)
        }
        UnexpectedToken(token: String, position: usize, expected: String) {
            description("unexpected token in AMR")
            display("unexpected token `{}` at byte {}, expected {}", token, position, expected)
        }
        UnterminatedString(position: usize) {
            description("unterminated string literal")
            display("unterminated string literal starting at byte {}", position)
        }
        MissingConcept(variable: String) {
            description("variable without concept")
            display("variable `{}` is not followed by `/ concept`", variable)
        }
        DuplicateVariable(variable: String) {
            description("variable defined twice")
            display("variable `{}` is defined more than once", variable)
        }
        TrailingInput(token: String, position: usize) {
            description("trailing input after AMR")
            display("trailing input `{}` at byte {} after the root node was closed", token, position)
        }
    }
}
