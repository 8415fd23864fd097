//! Snapshot tests for generated TypeScript units.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::path::PathBuf;

use shapegen_codegen::{builder::Indent, testing::assert_content_eq};
use shapegen_codegen_typescript::{GenerateError, Generator, GeneratorOptions, SynthesisError};
use shapegen_ir::{Declaration, Declarations, Member, SourceUnit, TypeRef};

fn options() -> GeneratorOptions {
    GeneratorOptions {
        root_dir: PathBuf::from("."),
        destination: PathBuf::from("output"),
        indent: Indent::Spaces(4),
    }
}

fn attachment_unit() -> SourceUnit {
    SourceUnit::new("test/Attachment.ts")
        .with(Declaration::interface(
            "IAttachment",
            vec![
                Member::property("fileId", TypeRef::number()),
                Member::property("size", TypeRef::number()),
                Member::property("name", TypeRef::string()),
                Member::property("description", TypeRef::string()),
                Member::property("lastModifiedDate", TypeRef::named("Date")),
            ],
        ))
        .with(Declaration::interface(
            "IWithOptionalType",
            vec![Member::property("name", TypeRef::string()).optional()],
        ))
        .with(Declaration::interface(
            "ITest",
            vec![
                Member::property("a", TypeRef::number()),
                Member::property("b", TypeRef::Union(vec![TypeRef::string(), TypeRef::number()])),
                Member::property("c", TypeRef::Union(vec![TypeRef::string(), TypeRef::null()])),
            ],
        ))
}

fn user_unit() -> SourceUnit {
    SourceUnit::new("test/User.ts")
        .with(Declaration::interface(
            "IUser",
            vec![
                Member::property("email", TypeRef::string()),
                Member::property("postIds", TypeRef::array(TypeRef::number())),
            ],
        ))
        .with(Declaration::interface(
            "IPost",
            vec![
                Member::property("id", TypeRef::number()),
                Member::property("comments", TypeRef::array(TypeRef::named("IComment"))),
            ],
        ))
        .with(Declaration::interface(
            "IComment",
            vec![
                Member::property("body", TypeRef::string()),
                Member::property("attachments", TypeRef::array(TypeRef::named("IAttachment"))),
                Member::property(
                    "version",
                    TypeRef::Object(vec![Member::property("date", TypeRef::named("Date"))]),
                ),
                Member::property(
                    "versions",
                    TypeRef::array(TypeRef::Object(vec![
                        Member::property("body", TypeRef::string()),
                        Member::property("date", TypeRef::named("Date")),
                    ])),
                ),
            ],
        ))
}

/// Generate and return the contents of the unit written to `out_file`.
fn generate_unit(provider: &Declarations, out_file: &str) -> String {
    let generation = Generator::new(provider, options())
        .generate()
        .expect("Failed to generate");
    generation
        .units
        .into_iter()
        .find(|unit| unit.out_file == PathBuf::from(out_file))
        .map(|unit| unit.contents)
        .expect("unit not generated")
}

#[test]
fn test_attachment_unit() {
    let provider = Declarations::new(vec![attachment_unit()]);
    let contents = generate_unit(&provider, "test/Attachment.ts");
    insta::assert_snapshot!("attachment_unit", contents);
}

#[test]
fn test_user_unit_with_cross_unit_references() {
    let provider = Declarations::new(vec![attachment_unit(), user_unit()]);
    let contents = generate_unit(&provider, "test/User.ts");
    insta::assert_snapshot!("user_unit", contents);
}

#[test]
fn test_generation_is_deterministic() {
    let provider = Declarations::new(vec![attachment_unit(), user_unit()]);
    let first = Generator::new(&provider, options()).generate().unwrap();
    let second = Generator::new(&provider, options()).generate().unwrap();
    assert_eq!(first.units.len(), second.units.len());
    for (a, b) in first.units.iter().zip(&second.units) {
        assert_content_eq(&a.contents, &b.contents);
    }
}

#[test]
fn test_helpers_emitted_once() {
    let provider = Declarations::new(vec![SourceUnit::new("test/Lists.ts").with(
        Declaration::interface(
            "ILists",
            vec![
                Member::property("a", TypeRef::array(TypeRef::number())),
                Member::property("b", TypeRef::array(TypeRef::string())),
                Member::property("c", TypeRef::array(TypeRef::boolean())),
            ],
        ),
    )]);
    let contents = generate_unit(&provider, "test/Lists.ts");

    assert_eq!(contents.matches("function validateVector<T>").count(), 1);
    assert_eq!(contents.matches("function isUnknownObject(").count(), 1);
    assert_eq!(contents.matches("validateVector(value['").count(), 3);
    let helper = contents.find("function isUnknownObject(").unwrap();
    let vector = contents.find("function validateVector<T>").unwrap();
    let body = contents.find("export function createILists").unwrap();
    assert!(helper < vector && vector < body);
}

#[test]
fn test_helpers_only_when_used() {
    let provider = Declarations::new(vec![SourceUnit::new("test/Flat.ts").with(
        Declaration::interface("IFlat", vec![Member::property("n", TypeRef::number())]),
    )]);
    let generation = Generator::new(&provider, options()).generate().unwrap();
    assert_eq!(generation.units[0].helper_ids(), ["isUnknownObject"]);
    assert!(!generation.units[0].contents.contains("validateVector"));
}

#[test]
fn test_unsupported_member_aborts_all_units() {
    let broken = SourceUnit::new("test/Broken.ts").with(Declaration::interface(
        "IBroken",
        vec![
            Member::property("ok", TypeRef::number()),
            Member::property("bad", TypeRef::Unsupported("undefined".into())),
        ],
    ));
    let provider = Declarations::new(vec![attachment_unit(), broken, user_unit()]);

    let err = Generator::new(&provider, options()).generate().unwrap_err();
    let GenerateError::Synthesis { unit, declaration, source } = err else {
        panic!("expected a synthesis failure");
    };
    assert_eq!(unit, PathBuf::from("test/Broken.ts"));
    assert_eq!(declaration, "IBroken");
    assert_eq!(source, SynthesisError::Unsupported { kind: "undefined".into() });
}

#[test]
fn test_malformed_members_become_diagnostics() {
    let provider = Declarations::new(vec![SourceUnit::new("test/Model.ts").with(
        Declaration::interface(
            "IModel",
            vec![Member::property("id", TypeRef::number()), Member::method("save")],
        ),
    )]);
    let generation = Generator::new(&provider, options()).generate().unwrap();

    let contents = &generation.units[0].contents;
    assert!(!contents.contains("save"));
    // one from the factory, one from the guard
    assert_eq!(generation.diagnostics.len(), 2);
    assert!(
        generation
            .diagnostics
            .iter()
            .all(|d| d.location.as_deref() == Some("test/Model.ts: IModel.save"))
    );
}

#[test]
fn test_tab_indentation() {
    let provider = Declarations::new(vec![SourceUnit::new("test/Flat.ts").with(
        Declaration::interface("IFlat", vec![Member::property("n", TypeRef::number())]),
    )]);
    let options = GeneratorOptions {
        indent: Indent::Tab,
        ..options()
    };
    let generation = Generator::new(&provider, options).generate().unwrap();
    assert!(generation.units[0].contents.contains("\n\t\t\"n\": 0,\n"));
}
