use crate::Session;
use crate::bridge::mirror::print_ast;
use rayon::prelude::*;

const LIBRARY_SDL: &str = r#"
type Query {
  book(id: ID!): Book
  books(first: Int = 10): [Book!]!
  author(name: String!): Author
}

type Book {
  id: ID!
  title: String
  author: Author
}

type Author {
  name: String!
  books: [Book!]!
}
"#;

fn document_source(idx: usize) -> String {
    match idx % 4 {
        0 => format!("query Q{idx} {{ book(id: \"{idx}\") {{ id title }} }}"),
        1 => format!("query Q{idx}($n: Int) {{ books(first: $n) {{ ...BookFields }} }} fragment BookFields on Book {{ title author {{ name }} }}"),
        2 => format!("query Q{idx} {{ author {{ name missing{idx} }} }}"),
        _ => format!("query Q{idx}($unused: Int) {{ books {{ title {{ x }} }} }}"),
    }
}

#[test]
fn concurrent_validation_matches_sequential_validation() {
    let mut session = Session::new();
    session.set_schema(LIBRARY_SDL).unwrap();
    let session = session;

    let file_ids: Vec<_> = (0..64)
        .into_par_iter()
        .map(|idx| (idx, session.add_executable(document_source(idx))))
        .collect();

    let concurrent: Vec<_> = file_ids
        .par_iter()
        .map(|(_, file_id)| session.validate_file(*file_id).unwrap())
        .collect();
    let sequential: Vec<_> = file_ids
        .iter()
        .map(|(_, file_id)| session.validate_file(*file_id).unwrap())
        .collect();

    assert_eq!(concurrent, sequential);
    for ((idx, _), diagnostics) in file_ids.iter().zip(&sequential) {
        assert_eq!(diagnostics.is_empty(), idx % 4 < 2, "document #{idx}: {diagnostics:?}");
    }
}

#[test]
fn concurrent_mirroring_matches_sequential_mirroring() {
    let mut session = Session::new();
    session.set_schema(LIBRARY_SDL).unwrap();
    let file_ids: Vec<_> = (0..32).map(|idx| session.add_executable(document_source(idx))).collect();

    let concurrent: Vec<String> = file_ids
        .par_iter()
        .map(|file_id| print_ast(&session.to_mirrored_ast(*file_id).unwrap()))
        .collect();
    let sequential: Vec<String> = file_ids
        .iter()
        .map(|file_id| print_ast(&session.to_mirrored_ast(*file_id).unwrap()))
        .collect();

    assert_eq!(concurrent, sequential);
}
