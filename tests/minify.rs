mod common;

use common::harness;
use forkhandle::{Contents, Emitter, FileRecord, Minifier, Stage, minify_css};
use std::io::Cursor;
use std::sync::Arc;

fn run(file: FileRecord) -> Vec<FileRecord> {
    let mut emit = Emitter::new();
    Minifier::new().process(file, &mut emit).unwrap();
    emit.into_pushed()
}

#[test]
fn strips_comments_whitespace_and_separators() {
    let css = "/* header */\n.a  {\n\ta : b; c\n}  \n";
    assert_eq!(minify_css(css), ".a{a:b;c}");
}

#[test]
fn comments_end_at_first_terminator() {
    assert_eq!(minify_css("/* a */x/* b */"), "x");
    assert_eq!(minify_css("/* multi\nline */y"), "y");
}

#[test]
fn unterminated_comment_is_kept() {
    assert_eq!(minify_css("a/* open"), "a/* open");
}

#[test]
fn braces_colons_and_important() {
    assert_eq!(
        minify_css("a { color : red !important; }"),
        "a{color:red!important;}"
    );
}

#[test]
fn commas_lose_trailing_space() {
    assert_eq!(minify_css("h1, h2, h3"), "h1,h2,h3");
}

#[test]
fn colon_with_single_space_side_is_untouched() {
    // Rule 3 needs a space on both sides
    assert_eq!(minify_css("a: b"), "a: b");
}

#[test]
fn buffered_file_is_replaced_by_minified_copy() {
    let file = FileRecord::new("src", "src/site.css").with_buffer("a { b : c; }\n");
    let out = run(file);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].contents.as_buffer(), Some(b"a{b:c;}".as_slice()));
    assert_eq!(out[0].relative_basename(), "site.css");
}

#[test]
fn stream_passes_through_as_the_same_reference() {
    let contents = Contents::stream(Cursor::new(b"a { b : c; }".to_vec()));
    let Contents::Stream(original) = &contents else {
        unreachable!();
    };
    let original = Arc::clone(original);

    let out = run(FileRecord::new("src", "src/site.css").with_contents(contents));

    assert_eq!(out.len(), 1);
    match &out[0].contents {
        Contents::Stream(stream) => assert!(Arc::ptr_eq(stream, &original)),
        other => panic!("expected stream, got {other:?}"),
    }
}

#[test]
fn null_and_empty_files_pass_through() {
    let out = run(FileRecord::new("src", "src/dir"));
    assert_eq!(out.len(), 1);
    assert!(out[0].is_null());

    let out = run(FileRecord::new("src", "src/empty.css").with_buffer(Vec::new()));
    assert_eq!(out[0].contents.as_buffer(), Some(&[][..]));
}

#[test]
fn invalid_utf8_is_decoded_lossily_and_the_stream_continues() {
    let h = harness();
    let mut pipeline = h.handles.pipeline().stage(h.handles.minify());

    let mut latin1 = b"a { content : '".to_vec();
    latin1.push(0xa9);
    latin1.extend_from_slice(b"'; }");
    let out = pipeline.run([
        FileRecord::new("src", "src/latin1.css").with_buffer(latin1),
        FileRecord::new("src", "src/next.css").with_buffer("b { c : d; }"),
    ]);

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].basename(), "latin1.css");
    assert_eq!(
        out[0].contents.as_buffer(),
        Some("a{content:'\u{fffd}';}".as_bytes())
    );
    assert_eq!(out[1].contents.as_buffer(), Some(&b"b{c:d;}"[..]));
    assert!(h.backend.requests().is_empty());
    assert_eq!(h.alert.beeps(), 0);
}
