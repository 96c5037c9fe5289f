use crate::CodeGenerationConfig;
use crate::CompileError;
use crate::descriptor::GeneratedType;
use crate::descriptor::GeneratedVariable;
use crate::descriptor::MarkerCapability;
use crate::descriptor::Provenance;
use crate::ir::CodegenIr;
use crate::ir::Operation;
use crate::ir::OperationKind;
use crate::naming::OperationNamer;
use crate::selection::FragmentRegistry;
use crate::selection::FragmentRegistryBuildError;
use crate::selection::FragmentRegistryBuilder;
use crate::selection::SelectionTypeBuilder;
use crate::types::SchemaTypeResolver;
use crate::types::TypeRef;
use crate::types::TypeResolver;

/// Compiles [`Operation`]s into [`GeneratedType`]s.
///
/// A compiler only holds shared references to read-only inputs, so one
/// instance can compile distinct operations from several threads at once.
pub struct OperationCompiler<'a, 'ir> {
    config: &'a CodeGenerationConfig,
    fragment_registry: &'a FragmentRegistry<'ir>,
    type_resolver: &'a dyn TypeResolver,
}
impl<'a, 'ir> OperationCompiler<'a, 'ir> {
    pub fn new(
        config: &'a CodeGenerationConfig,
        fragment_registry: &'a FragmentRegistry<'ir>,
        type_resolver: &'a dyn TypeResolver,
    ) -> Self {
        Self {
            config,
            fragment_registry,
            type_resolver,
        }
    }

    /// Compile a single operation.
    ///
    /// Nothing partial is returned on failure: either the whole
    /// [`GeneratedType`] is produced or the first [`CompileError`] is.
    pub fn compile(&self, operation: &Operation) -> Result<GeneratedType, CompileError> {
        let kind = operation.kind()?;
        let operation_name = OperationNamer::canonical_name(
            operation,
            self.config.use_semantic_naming,
        )?;

        let mut type_builder = SelectionTypeBuilder::new(
            self.fragment_registry,
            self.type_resolver,
        );
        for fragment_name in operation.fragments_referenced() {
            type_builder.reserve_name(fragment_name.as_str());
        }
        let data = type_builder.build_data_type(
            kind.semantic_suffix(),
            operation.fields(),
            &[],
            &[],
        )?;

        let variables = operation.variables().iter()
            .map(|variable| {
                TypeRef::parse(variable.type_str())
                    .map(|type_ref| GeneratedVariable {
                        name: variable.name().to_string(),
                        type_ref,
                    })
                    .map_err(|err| CompileError::MalformedTypeReference {
                        name: format!("${}", variable.name()),
                        err,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "Compiled {kind} `{}` as `{operation_name}` ({} top-level members).",
            operation.name(),
            data.members().len(),
        );

        Ok(GeneratedType {
            conforms_to: vec![MarkerCapability::OperationData],
            data,
            is_mutation: kind == OperationKind::Mutation,
            is_query: kind == OperationKind::Query,
            is_subscription: kind == OperationKind::Subscription,
            kind,
            operation_name,
            provenance: Provenance {
                file_path: operation.file_path().to_string(),
                fragments_referenced: operation.fragments_referenced().clone(),
                operation_id: operation.operation_id().to_string(),
            },
            source_text: operation.source_text().to_string(),
            variables,
            with_builder: self.config.generate_model_builder,
        })
    }

    /// Compile every operation, isolating failures: an operation that fails
    /// is recorded in [`CompileReport::failures`] and the rest still compile.
    pub fn compile_all(&self, operations: &[Operation]) -> CompileReport {
        let mut report = CompileReport::default();
        for operation in operations {
            match self.compile(operation) {
                Ok(generated) => report.generated.push(generated),
                Err(error) => {
                    log::warn!(
                        "Failed to compile operation `{}` from `{}`: {error}",
                        operation.name(),
                        operation.file_path(),
                    );
                    report.failures.push(OperationFailure {
                        error,
                        file_path: operation.file_path().to_string(),
                        operation_name: operation.name().to_string(),
                    });
                }
            }
        }
        report
    }

    /// Build the fragment registry and leaf resolver for `ir` and compile all
    /// of its operations.
    ///
    /// Fails only if the IR's fragments cannot form a registry (duplicates,
    /// spread cycles, undefined spreads); per-operation failures are in the
    /// returned report.
    pub fn compile_ir(
        config: &CodeGenerationConfig,
        ir: &CodegenIr,
    ) -> Result<CompileReport, Vec<FragmentRegistryBuildError>> {
        let mut registry_builder = FragmentRegistryBuilder::new();
        registry_builder.add_fragments(ir.fragments())?;
        let fragment_registry = registry_builder.build()?;

        let type_resolver = SchemaTypeResolver::new(
            ir.types_used(),
            config.custom_type_map.clone(),
        );

        let compiler = OperationCompiler::new(config, &fragment_registry, &type_resolver);
        Ok(compiler.compile_all(ir.operations()))
    }

    pub fn is_mutation(operation: &Operation) -> bool {
        operation.operation_type() == OperationKind::Mutation.ir_name()
    }

    pub fn is_query(operation: &Operation) -> bool {
        operation.operation_type() == OperationKind::Query.ir_name()
    }

    pub fn is_subscription(operation: &Operation) -> bool {
        operation.operation_type() == OperationKind::Subscription.ir_name()
    }
}

/// Outcome of compiling a batch of operations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompileReport {
    pub generated: Vec<GeneratedType>,
    pub failures: Vec<OperationFailure>,
}
impl CompileReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A single operation that failed to compile, with enough context to report
/// it.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationFailure {
    pub error: CompileError,
    pub file_path: String,
    pub operation_name: String,
}
impl std::fmt::Display for OperationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file_path =
            if self.file_path.is_empty() { "<unknown file>" } else { &self.file_path };
        write!(f, "{file_path}: {}: {}", self.operation_name, self.error)
    }
}
