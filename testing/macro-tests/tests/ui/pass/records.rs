use structq::prelude::*;

#[derive(Default, Filter)]
struct Inner {
    #[filter(op = ">=")]
    age: u8,
    #[filter(op = "is not null")]
    verified: Option<bool>,
}

#[derive(Default, Filter)]
struct Outer {
    r#type: String,
    #[filter(nested)]
    inner: Inner,
    #[filter(embed)]
    either: Option<Box<Inner>>,
    #[filter(op = "page")]
    page: u32,
    #[filter(op = "size")]
    size: u32,
    #[filter(field = "")]
    plain: char,
}

fn main() {
    let compiled = Compiler::default().compile(&Outer::default());
    assert!(compiled.is_empty());
}
