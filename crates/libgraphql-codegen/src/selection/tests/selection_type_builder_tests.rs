use crate::CompileError;
use crate::descriptor::FieldSource;
use crate::descriptor::TypeDescriptor;
use crate::ir::CodegenIr;
use crate::ir::Field;
use crate::ir::Fragment;
use crate::selection::FragmentRegistry;
use crate::selection::FragmentRegistryBuilder;
use crate::selection::SelectionTypeBuilder;
use crate::tests::test_utils;
use crate::types::BuiltinScalar;
use crate::types::LeafKind;
use crate::types::SchemaTypeResolver;
use crate::types::TypeRefParseError;
use indexmap::IndexMap;

fn layout(
    fragments: &[Fragment],
    fields: &[Field],
    root_spreads: &[String],
) -> Result<TypeDescriptor, CompileError> {
    let mut registry_builder = FragmentRegistryBuilder::new();
    registry_builder.add_fragments(fragments).unwrap();
    let registry = registry_builder.build().unwrap();
    let resolver = SchemaTypeResolver::default();
    SelectionTypeBuilder::new(&registry, &resolver)
        .build_data_type("Query", fields, root_spreads, &[])
}

fn member_names(descriptor: &TypeDescriptor) -> Vec<&str> {
    descriptor.members().iter().map(|m| m.response_name()).collect()
}

fn nested<'a>(descriptor: &'a TypeDescriptor, response_name: &str) -> &'a TypeDescriptor {
    descriptor.member(response_name)
        .and_then(|m| m.nested())
        .unwrap_or_else(|| panic!("`{response_name}` has no nested record"))
}

/// Verifies that members follow the order fields were selected in, and
/// that reordering the selection reorders the members the same way.
#[test]
fn members_follow_selection_order() {
    let fields = vec![
        test_utils::leaf("name", "String"),
        test_utils::leaf("id", "ID!"),
        test_utils::leaf("age", "Int"),
    ];
    let data = layout(&[], &fields, &[]).unwrap();

    assert_eq!(data.name(), "Data");
    assert_eq!(data.schema_type_name(), "Query");
    assert_eq!(member_names(&data), vec!["name", "id", "age"]);
    assert!(data.fragment_refs().is_empty());

    let reordered = vec![
        fields[2].clone(),
        fields[0].clone(),
        fields[1].clone(),
    ];
    let data = layout(&[], &reordered, &[]).unwrap();
    assert_eq!(member_names(&data), vec!["age", "name", "id"]);
}

/// Verifies that nested records are named after the capitalized response
/// name and select from the innermost named type of the field.
#[test]
fn nested_records_named_after_response_names() {
    let fields = vec![
        test_utils::object("viewer", "User!", vec![test_utils::leaf("id", "ID!")]),
        test_utils::object("friends", "[User!]!", vec![test_utils::leaf("name", "String")]),
    ];
    let data = layout(&[], &fields, &[]).unwrap();

    let viewer = data.member("viewer").unwrap();
    assert_eq!(viewer.leaf_kind(), &LeafKind::Composite);
    assert!(viewer.leaf_kind().is_composite());
    assert_eq!(viewer.field_type().to_string(), "User!");
    assert_eq!(nested(&data, "viewer").name(), "Viewer");
    assert_eq!(nested(&data, "viewer").schema_type_name(), "User");

    let friends = data.member("friends").unwrap();
    assert!(friends.field_type().is_list());
    assert_eq!(nested(&data, "friends").name(), "Friends");
    assert_eq!(nested(&data, "friends").schema_type_name(), "User");
}

#[test]
fn colliding_nested_names_get_integer_suffixes() {
    let fields = vec![
        test_utils::object("user", "User", vec![
            test_utils::object("user", "User", vec![test_utils::leaf("id", "ID!")]),
        ]),
    ];
    let data = layout(&[], &fields, &[]).unwrap();

    let outer = nested(&data, "user");
    assert_eq!(outer.name(), "User");
    assert_eq!(nested(outer, "user").name(), "User1");
}

/// Verifies that a field named `data` can't shadow the root record.
#[test]
fn nested_record_never_named_data() {
    let fields = vec![
        test_utils::object("data", "Payload", vec![test_utils::leaf("id", "ID!")]),
    ];
    let data = layout(&[], &fields, &[]).unwrap();
    assert_eq!(nested(&data, "data").name(), "Data1");
}

#[test]
fn reserved_names_are_skipped() {
    let fields = vec![
        test_utils::object("user", "User", vec![test_utils::leaf("id", "ID!")]),
    ];
    let resolver = SchemaTypeResolver::default();
    let mut builder = SelectionTypeBuilder::new(FragmentRegistry::empty(), &resolver);
    builder.reserve_name("User");

    let data = builder.build_data_type("Query", &fields, &[], &[]).unwrap();
    assert_eq!(nested(&data, "user").name(), "User1");
}

/// Verifies that a field selected both directly and through a fragment
/// yields one member, attributed to the first selection.
#[test]
fn fragment_fields_merge_with_direct_selection() {
    let fragments = vec![test_utils::fragment("UserFields", "User", vec![
        test_utils::leaf("id", "ID!"),
        test_utils::leaf("name", "String"),
    ])];
    let fields = vec![test_utils::with_spreads(
        test_utils::object("user", "User", vec![test_utils::leaf("id", "ID!")]),
        &["UserFields"],
    )];
    let data = layout(&fragments, &fields, &[]).unwrap();

    let user = nested(&data, "user");
    assert_eq!(member_names(user), vec!["id", "name"]);
    assert_eq!(user.member("id").unwrap().source(), &FieldSource::Direct);
    assert_eq!(
        user.member("name").unwrap().source(),
        &FieldSource::FragmentSpread("UserFields".to_string()),
    );
    assert!(!user.member("name").unwrap().conditional());
    assert_eq!(user.fragment_refs(), &["UserFields".to_string()]);
}

#[test]
fn identical_fields_from_two_fragments_merge() {
    let fragments = vec![
        test_utils::fragment("A", "User", vec![test_utils::leaf("id", "ID")]),
        test_utils::fragment("B", "User", vec![test_utils::leaf("id", "ID")]),
    ];
    let fields = vec![test_utils::with_spreads(
        test_utils::object("user", "User", vec![]),
        &["A", "B"],
    )];
    let data = layout(&fragments, &fields, &[]).unwrap();

    let user = nested(&data, "user");
    assert_eq!(member_names(user), vec!["id"]);
    assert_eq!(
        user.member("id").unwrap().source(),
        &FieldSource::FragmentSpread("A".to_string()),
    );
    assert_eq!(user.fragment_refs(), &["A".to_string(), "B".to_string()]);
}

#[test]
fn differently_typed_fields_conflict() {
    let fragments = vec![
        test_utils::fragment("A", "User", vec![test_utils::leaf("id", "ID!")]),
        test_utils::fragment("B", "User", vec![test_utils::leaf("id", "String")]),
    ];
    let fields = vec![test_utils::with_spreads(
        test_utils::object("user", "User", vec![]),
        &["A", "B"],
    )];

    assert_eq!(
        layout(&fragments, &fields, &[]),
        Err(CompileError::FieldShapeConflict {
            parent_type_name: "User".to_string(),
            response_name: "id".to_string(),
            first_shape: "id: ID!".to_string(),
            first_source: FieldSource::FragmentSpread("A".to_string()),
            second_shape: "id: String".to_string(),
            second_source: FieldSource::FragmentSpread("B".to_string()),
        }),
    );
}

/// Verifies that one alias can't stand for two different schema fields.
#[test]
fn alias_of_two_fields_conflicts() {
    let fields = vec![
        test_utils::aliased("name", "firstName", "String"),
        test_utils::aliased("name", "lastName", "String"),
    ];

    assert_eq!(
        layout(&[], &fields, &[]),
        Err(CompileError::FieldShapeConflict {
            parent_type_name: "Query".to_string(),
            response_name: "name".to_string(),
            first_shape: "firstName: String".to_string(),
            first_source: FieldSource::Direct,
            second_shape: "lastName: String".to_string(),
            second_source: FieldSource::Direct,
        }),
    );
}

fn pet_with_branches(branches: Vec<crate::ir::InlineFragment>) -> Vec<Field> {
    let mut pet = test_utils::object("pet", "Pet", vec![]);
    pet.inline_fragments = branches;
    vec![pet]
}

/// Verifies that one alias may name different schema fields in branches
/// narrowed to different types, as in
/// `pet { ... on Dog { name: nickname } ... on Cat { name } }`.
#[test]
fn alias_across_disjoint_type_conditions_merges() {
    let fields = pet_with_branches(vec![
        test_utils::inline_fragment("Dog", vec![
            test_utils::aliased("name", "nickname", "String"),
        ]),
        test_utils::inline_fragment("Cat", vec![test_utils::leaf("name", "String")]),
    ]);
    let data = layout(&[], &fields, &[]).unwrap();

    let pet = nested(&data, "pet");
    assert_eq!(member_names(pet), vec!["name"]);
    let name = pet.member("name").unwrap();
    assert_eq!(name.field_name(), "nickname");
    assert_eq!(name.source(), &FieldSource::InlineFragment("Dog".to_string()));
    assert!(name.conditional());
}

#[test]
fn alias_under_same_type_condition_conflicts() {
    let fields = pet_with_branches(vec![
        test_utils::inline_fragment("Dog", vec![
            test_utils::aliased("name", "nickname", "String"),
        ]),
        test_utils::inline_fragment("Dog", vec![test_utils::leaf("name", "String")]),
    ]);

    assert_eq!(
        layout(&[], &fields, &[]),
        Err(CompileError::FieldShapeConflict {
            parent_type_name: "Pet".to_string(),
            response_name: "name".to_string(),
            first_shape: "nickname: String".to_string(),
            first_source: FieldSource::InlineFragment("Dog".to_string()),
            second_shape: "name: String".to_string(),
            second_source: FieldSource::InlineFragment("Dog".to_string()),
        }),
    );
}

/// Verifies that a selection on the enclosing type still pins the schema
/// field for every narrowed branch.
#[test]
fn alias_against_enclosing_type_selection_conflicts() {
    let mut fields = pet_with_branches(vec![
        test_utils::inline_fragment("Dog", vec![
            test_utils::aliased("name", "nickname", "String"),
        ]),
    ]);
    fields[0].fields = vec![test_utils::leaf("name", "String")];

    assert_eq!(
        layout(&[], &fields, &[]),
        Err(CompileError::FieldShapeConflict {
            parent_type_name: "Pet".to_string(),
            response_name: "name".to_string(),
            first_shape: "name: String".to_string(),
            first_source: FieldSource::Direct,
            second_shape: "nickname: String".to_string(),
            second_source: FieldSource::InlineFragment("Dog".to_string()),
        }),
    );
}

#[test]
fn disjoint_type_conditions_still_need_matching_types() {
    let fields = pet_with_branches(vec![
        test_utils::inline_fragment("Dog", vec![test_utils::leaf("name", "String")]),
        test_utils::inline_fragment("Cat", vec![test_utils::leaf("name", "Int")]),
    ]);
    assert!(matches!(
        layout(&[], &fields, &[]),
        Err(CompileError::FieldShapeConflict { response_name, .. }) if response_name == "name",
    ));
}

/// Verifies that the earlier contributions are all checked, not only the
/// first one.
#[test]
fn conflict_with_a_later_branch_is_found() {
    let fields = pet_with_branches(vec![
        test_utils::inline_fragment("Dog", vec![
            test_utils::aliased("name", "nickname", "String"),
        ]),
        test_utils::inline_fragment("Cat", vec![test_utils::leaf("name", "String")]),
        test_utils::inline_fragment("Cat", vec![
            test_utils::aliased("name", "owner", "String"),
        ]),
    ]);

    assert_eq!(
        layout(&[], &fields, &[]),
        Err(CompileError::FieldShapeConflict {
            parent_type_name: "Pet".to_string(),
            response_name: "name".to_string(),
            first_shape: "name: String".to_string(),
            first_source: FieldSource::InlineFragment("Cat".to_string()),
            second_shape: "owner: String".to_string(),
            second_source: FieldSource::InlineFragment("Cat".to_string()),
        }),
    );
}

#[test]
fn inline_fragment_on_subtype_is_conditional() {
    let mut hero = test_utils::object("hero", "Character", vec![
        test_utils::leaf("name", "String!"),
    ]);
    hero.inline_fragments = vec![test_utils::inline_fragment("Droid", vec![
        test_utils::leaf("primaryFunction", "String"),
    ])];
    let fields = vec![hero];
    let data = layout(&[], &fields, &[]).unwrap();

    let hero = nested(&data, "hero");
    assert_eq!(member_names(hero), vec!["name", "primaryFunction"]);
    assert!(!hero.member("name").unwrap().conditional());

    let primary_function = hero.member("primaryFunction").unwrap();
    assert!(primary_function.conditional());
    assert_eq!(
        primary_function.source(),
        &FieldSource::InlineFragment("Droid".to_string()),
    );
    assert!(hero.fragment_refs().is_empty());
}

#[test]
fn inline_fragment_on_same_type_is_unconditional() {
    let mut hero = test_utils::object("hero", "Character", vec![]);
    hero.inline_fragments = vec![test_utils::inline_fragment("Character", vec![
        test_utils::leaf("name", "String!"),
    ])];
    let fields = vec![hero];
    let data = layout(&[], &fields, &[]).unwrap();

    assert!(!nested(&data, "hero").member("name").unwrap().conditional());
}

#[test]
fn fragment_on_subtype_is_conditional() {
    let fragments = vec![test_utils::fragment("DroidFields", "Droid", vec![
        test_utils::leaf("primaryFunction", "String"),
    ])];
    let fields = vec![test_utils::with_spreads(
        test_utils::object("hero", "Character", vec![]),
        &["DroidFields"],
    )];
    let data = layout(&fragments, &fields, &[]).unwrap();

    let hero = nested(&data, "hero");
    assert!(hero.member("primaryFunction").unwrap().conditional());
    assert_eq!(hero.fragment_refs(), &["DroidFields".to_string()]);
}

/// Verifies that a member is conditional only when every selection of it
/// is.
#[test]
fn conditional_only_if_every_selection_is() {
    let mut guarded = test_utils::leaf("name", "String");
    guarded.is_conditional = true;
    let mut guarded_age = test_utils::leaf("age", "Int");
    guarded_age.is_conditional = true;

    let fields = vec![
        guarded.clone(),
        test_utils::leaf("name", "String"),
        guarded_age.clone(),
        guarded_age,
    ];
    let data = layout(&[], &fields, &[]).unwrap();

    assert_eq!(member_names(&data), vec!["name", "age"]);
    assert!(!data.member("name").unwrap().conditional());
    assert!(data.member("age").unwrap().conditional());
}

/// Verifies that fragments spread inside another fragment contribute
/// fields but are not listed as references of the level.
#[test]
fn transitive_spreads_are_not_level_references() {
    let mut outer = test_utils::fragment("Outer", "User", vec![
        test_utils::leaf("id", "ID!"),
    ]);
    outer.fragment_spreads = vec!["Inner".to_string()];
    let fragments = vec![
        outer,
        test_utils::fragment("Inner", "User", vec![test_utils::leaf("email", "String")]),
    ];
    let fields = vec![test_utils::with_spreads(
        test_utils::object("user", "User", vec![]),
        &["Outer"],
    )];
    let data = layout(&fragments, &fields, &[]).unwrap();

    let user = nested(&data, "user");
    assert_eq!(member_names(user), vec!["id", "email"]);
    assert_eq!(
        user.member("email").unwrap().source(),
        &FieldSource::FragmentSpread("Outer".to_string()),
    );
    assert_eq!(user.fragment_refs(), &["Outer".to_string()]);
}

#[test]
fn spreads_inside_inline_fragments_are_level_references() {
    let fragments = vec![test_utils::fragment("DroidFields", "Droid", vec![
        test_utils::leaf("primaryFunction", "String"),
    ])];
    let mut inline = test_utils::inline_fragment("Droid", vec![]);
    inline.fragment_spreads = vec!["DroidFields".to_string()];
    let mut hero = test_utils::object("hero", "Character", vec![]);
    hero.inline_fragments = vec![inline];
    let fields = vec![hero];
    let data = layout(&fragments, &fields, &[]).unwrap();

    let hero = nested(&data, "hero");
    assert_eq!(hero.fragment_refs(), &["DroidFields".to_string()]);
    assert_eq!(
        hero.member("primaryFunction").unwrap().source(),
        &FieldSource::InlineFragment("Droid".to_string()),
    );
}

#[test]
fn unresolved_fragment_spread_fails() {
    let fields = vec![test_utils::with_spreads(
        test_utils::object("user", "User", vec![]),
        &["Missing"],
    )];
    assert_eq!(
        layout(&[], &fields, &[]),
        Err(CompileError::UnresolvedFragmentReference {
            fragment_name: "Missing".to_string(),
        }),
    );
}

/// Verifies that two selections of the same composite field merge their
/// nested selections into one record.
#[test]
fn composite_selections_merge_recursively() {
    let fragments = vec![test_utils::fragment("ViewerName", "Query", vec![
        test_utils::object("viewer", "User", vec![test_utils::leaf("name", "String")]),
    ])];
    let fields = vec![
        test_utils::object("viewer", "User", vec![test_utils::leaf("id", "ID!")]),
    ];
    let root_spreads = vec!["ViewerName".to_string()];
    let data = layout(&fragments, &fields, &root_spreads).unwrap();

    assert_eq!(member_names(&data), vec!["viewer"]);
    assert_eq!(data.fragment_refs(), &["ViewerName".to_string()]);
    let viewer = nested(&data, "viewer");
    assert_eq!(viewer.name(), "Viewer");
    assert_eq!(member_names(viewer), vec!["id", "name"]);
}

#[test]
fn malformed_type_reference_fails() {
    let fields = vec![test_utils::leaf("id", "[ID")];
    assert_eq!(
        layout(&[], &fields, &[]),
        Err(CompileError::MalformedTypeReference {
            name: "id".to_string(),
            err: TypeRefParseError::UnbalancedBrackets("[ID".to_string()),
        }),
    );
}

#[test]
fn leaf_kinds_come_from_the_resolver() {
    let ir = CodegenIr::from_str(r#"{
        "typesUsed": [{ "kind": "EnumType", "name": "Episode" }]
    }"#, None).unwrap();
    let mut custom_type_map = IndexMap::new();
    custom_type_map.insert("Date".to_string(), "java.time.LocalDate".to_string());
    let resolver = SchemaTypeResolver::new(ir.types_used(), custom_type_map);

    let fields = vec![
        test_utils::leaf("id", "ID!"),
        test_utils::leaf("episode", "Episode"),
        test_utils::leaf("born", "Date"),
        test_utils::leaf("extra", "[JSON]"),
    ];
    let data = SelectionTypeBuilder::new(FragmentRegistry::empty(), &resolver)
        .build_data_type("Query", &fields, &[], &[])
        .unwrap();

    let kinds: Vec<_> = data.members().iter().map(|m| m.leaf_kind().clone()).collect();
    assert_eq!(kinds, vec![
        LeafKind::Scalar { scalar: BuiltinScalar::ID },
        LeafKind::Enum,
        LeafKind::CustomScalar { mapped_type: Some("java.time.LocalDate".to_string()) },
        LeafKind::CustomScalar { mapped_type: None },
    ]);
    assert!(data.members().iter().all(|m| m.nested().is_none()));
    assert!(data.members().iter().all(|m| !m.leaf_kind().is_composite()));
}

#[test]
fn deprecation_and_description_carry_over() {
    let mut old = test_utils::leaf("oldName", "String");
    old.is_deprecated = true;
    old.deprecation_reason = Some("Use `name`.".to_string());
    let mut unexplained = test_utils::leaf("legacy", "Int");
    unexplained.is_deprecated = true;
    let mut described = test_utils::leaf("name", "String");
    described.description = Some("Display name".to_string());

    let fields = vec![old, unexplained, described];
    let data = layout(&[], &fields, &[]).unwrap();

    assert_eq!(data.member("oldName").unwrap().deprecation_reason(), Some("Use `name`."));
    assert_eq!(data.member("legacy").unwrap().deprecation_reason(), Some(""));
    assert_eq!(data.member("name").unwrap().deprecation_reason(), None);
    assert_eq!(data.member("name").unwrap().description(), Some("Display name"));
}
