use structq::prelude::*;

#[derive(Filter)]
struct Search<'a> {
    #[filter(op = "like", field = "title|body")]
    text: &'a str,
    tags: &'a [&'a str],
    #[filter(op = "desc", field = "created_at")]
    newest: bool,
}

fn main() {
    let tags = ["rust"];
    let search = Search {
        text: "borrow",
        tags: &tags,
        newest: true,
    };

    let compiled = Compiler::new().compile(&search);
    assert_eq!(compiled.order_by.len(), 1);
}
