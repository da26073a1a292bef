// Create the Error, ErrorKind, ResultExt, and Result types
error_chain! {
    links {
        Eval(::amr_eval::errors::Error, ::amr_eval::errors::ErrorKind);
        Amr(::amr::errors::Error, ::amr::errors::ErrorKind);
    }

    foreign_links {
        Json(::serde_json::Error);
    }
}
