use crate::CompileError;
use crate::descriptor::FieldSource;
use crate::descriptor::Member;
use crate::descriptor::TypeDescriptor;
use crate::ir::Field;
use crate::ir::InlineFragment;
use crate::naming::NameAllocator;
use crate::naming::capitalize;
use crate::selection::FragmentRegistry;
use crate::types::LeafKind;
use crate::types::TypeRef;
use crate::types::TypeResolver;
use indexmap::IndexMap;
use indexmap::IndexSet;

type Result<T> = std::result::Result<T, CompileError>;

/// Name of the root record every operation's result is laid out into.
pub const DATA_TYPE_NAME: &str = "Data";

/// Lays out a selection set as a tree of [`TypeDescriptor`]s.
///
/// Fields selected directly, fields pulled in by fragment spreads, and
/// fields of inline fragments are merged into one record per level. Two
/// selections of the same response name merge into a single member when
/// they agree on type and, unless they sit under two different type
/// conditions, on the schema field they select. Otherwise layout fails with
/// [`CompileError::FieldShapeConflict`].
///
/// A builder owns the [`NameAllocator`] for one compilation unit, so nested
/// record names never collide with each other, with `Data`, or with any name
/// reserved through [`SelectionTypeBuilder::reserve_name()`]. Use a fresh
/// builder per operation.
pub struct SelectionTypeBuilder<'a, 'ir> {
    fragment_registry: &'a FragmentRegistry<'ir>,
    name_allocator: NameAllocator,
    type_resolver: &'a dyn TypeResolver,
}

/// One selection of a response name at a given level.
struct Contribution<'ir> {
    conditional: bool,
    field: &'ir Field,
    /// The type condition this selection was narrowed to, when it sits in a
    /// fragment whose type condition differs from the enclosing schema type.
    narrowed_to: Option<&'ir str>,
    parsed_type: TypeRef,
    source: FieldSource,
}
impl Contribution<'_> {
    /// Two selections of one response name can share a member when they
    /// resolve to the same type and, unless they apply to disjoint type
    /// conditions, select the same schema field.
    fn merges_with(&self, other: &Contribution<'_>) -> bool {
        if self.parsed_type != other.parsed_type {
            return false;
        }
        match (self.narrowed_to, other.narrowed_to) {
            (Some(a), Some(b)) if a != b => true,
            _ => self.field.field_name() == other.field.field_name(),
        }
    }
}

/// Everything selected at one level, grouped by response name in first-seen
/// order.
#[derive(Default)]
struct Level<'ir> {
    contributions: IndexMap<String, Vec<Contribution<'ir>>>,
    fragment_refs: IndexSet<String>,
}

/// Context inherited while walking into fragment bodies.
#[derive(Clone, Copy)]
struct Scope<'s, 'ir> {
    conditional: bool,
    narrowed_to: Option<&'ir str>,
    /// False inside a named fragment's body: fragments spread from within
    /// another fragment belong to that fragment's type, not to this level.
    record_refs: bool,
    /// Set while walking the body of a fragment so every field found there
    /// is attributed to the spread (or inline fragment) that pulled it in.
    source: Option<&'s FieldSource>,
}
impl Scope<'_, '_> {
    fn root() -> Self {
        Self {
            conditional: false,
            narrowed_to: None,
            record_refs: true,
            source: None,
        }
    }
}

impl<'a, 'ir> SelectionTypeBuilder<'a, 'ir> {
    pub fn new(
        fragment_registry: &'a FragmentRegistry<'ir>,
        type_resolver: &'a dyn TypeResolver,
    ) -> Self {
        let mut name_allocator = NameAllocator::new();
        name_allocator.reserve(DATA_TYPE_NAME);
        Self {
            fragment_registry,
            name_allocator,
            type_resolver,
        }
    }

    /// Keep nested records from being named `name`.
    pub fn reserve_name(&mut self, name: impl Into<String>) {
        self.name_allocator.reserve(name);
    }

    /// Lay out the root `Data` record of an operation.
    pub fn build_data_type(
        &mut self,
        schema_type_name: &str,
        fields: &'ir [Field],
        fragment_spreads: &'ir [String],
        inline_fragments: &'ir [InlineFragment],
    ) -> Result<TypeDescriptor> {
        self.build_root_type(
            DATA_TYPE_NAME,
            schema_type_name,
            fields,
            fragment_spreads,
            inline_fragments,
        )
    }

    /// Lay out a root record named `root_name` over `schema_type_name`.
    ///
    /// `root_name` is used verbatim (it is not run through the allocator);
    /// nested records get allocated names derived from their field's
    /// response name.
    pub fn build_root_type(
        &mut self,
        root_name: &str,
        schema_type_name: &str,
        fields: &'ir [Field],
        fragment_spreads: &'ir [String],
        inline_fragments: &'ir [InlineFragment],
    ) -> Result<TypeDescriptor> {
        self.name_allocator.reserve(root_name);

        let mut level = Level::default();
        self.collect_level(
            &mut level,
            schema_type_name,
            fields,
            fragment_spreads,
            inline_fragments,
            Scope::root(),
        )?;

        self.build_type(root_name.to_string(), schema_type_name, level)
    }

    /// Gathers every field selected at one level into `level`, following
    /// fragment spreads and inline fragments.
    fn collect_level(
        &self,
        level: &mut Level<'ir>,
        schema_type_name: &str,
        fields: &'ir [Field],
        fragment_spreads: &'ir [String],
        inline_fragments: &'ir [InlineFragment],
        scope: Scope<'_, 'ir>,
    ) -> Result<()> {
        for field in fields {
            let parsed_type = TypeRef::parse(field.type_str()).map_err(|err| {
                CompileError::MalformedTypeReference {
                    name: field.response_name().to_string(),
                    err,
                }
            })?;

            level.contributions
                .entry(field.response_name().to_string())
                .or_default()
                .push(Contribution {
                    conditional: scope.conditional || field.is_conditional(),
                    field,
                    narrowed_to: scope.narrowed_to,
                    parsed_type,
                    source: scope.source.cloned().unwrap_or(FieldSource::Direct),
                });
        }

        for fragment_name in fragment_spreads {
            let fragment = self.fragment_registry.get(fragment_name)?;
            if scope.record_refs {
                level.fragment_refs.insert(fragment_name.to_string());
            }

            let source = scope.source.cloned().unwrap_or_else(
                || FieldSource::FragmentSpread(fragment_name.to_string()),
            );
            let narrowed = fragment.type_condition() != schema_type_name;
            self.collect_level(
                level,
                schema_type_name,
                fragment.fields(),
                fragment.fragment_spreads(),
                fragment.inline_fragments(),
                Scope {
                    conditional: scope.conditional || narrowed,
                    narrowed_to: if narrowed {
                        Some(fragment.type_condition())
                    } else {
                        scope.narrowed_to
                    },
                    record_refs: false,
                    source: Some(&source),
                },
            )?;
        }

        for inline_fragment in inline_fragments {
            let source = scope.source.cloned().unwrap_or_else(
                || FieldSource::InlineFragment(
                    inline_fragment.type_condition().to_string(),
                ),
            );
            let narrowed = inline_fragment.type_condition() != schema_type_name;
            self.collect_level(
                level,
                schema_type_name,
                inline_fragment.fields(),
                inline_fragment.fragment_spreads(),
                &[],
                Scope {
                    conditional: scope.conditional || narrowed,
                    narrowed_to: if narrowed {
                        Some(inline_fragment.type_condition())
                    } else {
                        scope.narrowed_to
                    },
                    record_refs: scope.record_refs,
                    source: Some(&source),
                },
            )?;
        }

        Ok(())
    }

    fn build_type(
        &mut self,
        name: String,
        schema_type_name: &str,
        level: Level<'ir>,
    ) -> Result<TypeDescriptor> {
        let mut members = Vec::with_capacity(level.contributions.len());

        for (response_name, contributions) in level.contributions {
            let Some((first, rest)) = contributions.split_first() else {
                continue;
            };

            for (idx, other) in rest.iter().enumerate() {
                let earlier = &contributions[..=idx];
                if let Some(conflicting) =
                    earlier.iter().find(|prev| !prev.merges_with(other)) {
                    return Err(CompileError::FieldShapeConflict {
                        parent_type_name: schema_type_name.to_string(),
                        response_name,
                        first_shape: describe_shape(conflicting),
                        first_source: conflicting.source.clone(),
                        second_shape: describe_shape(other),
                        second_source: other.source.clone(),
                    });
                }
                log::trace!(
                    "Merged `{response_name}` from {} into `{name}`.",
                    other.source,
                );
            }

            let has_selection = contributions.iter()
                .any(|contribution| contribution.field.has_selection());

            let (leaf_kind, nested) = if has_selection {
                let nested_schema_type = first.parsed_type.innermost_name();
                let nested_name =
                    self.name_allocator.allocate(&capitalize(&response_name));

                let mut nested_level = Level::default();
                for contribution in &contributions {
                    self.collect_level(
                        &mut nested_level,
                        nested_schema_type,
                        contribution.field.fields(),
                        contribution.field.fragment_spreads(),
                        contribution.field.inline_fragments(),
                        Scope::root(),
                    )?;
                }

                let nested = self.build_type(
                    nested_name,
                    nested_schema_type,
                    nested_level,
                )?;
                (LeafKind::Composite, Some(nested))
            } else {
                let leaf_kind = self.type_resolver.resolve_leaf(
                    first.parsed_type.innermost_name(),
                );
                (leaf_kind, None)
            };

            let deprecation_reason = first.field.is_deprecated().then(|| {
                first.field.deprecation_reason().unwrap_or_default().to_string()
            });

            members.push(Member {
                conditional: contributions.iter().all(|c| c.conditional),
                deprecation_reason,
                description: first.field.description().map(str::to_string),
                field_name: first.field.field_name().to_string(),
                field_type: first.parsed_type.clone(),
                leaf_kind,
                nested,
                response_name,
                source: first.source.clone(),
            });
        }

        Ok(TypeDescriptor {
            fragment_refs: level.fragment_refs.into_iter().collect(),
            members,
            name,
            schema_type_name: schema_type_name.to_string(),
        })
    }
}

fn describe_shape(contribution: &Contribution<'_>) -> String {
    format!("{}: {}", contribution.field.field_name(), contribution.parsed_type)
}
