//! Configuration → type members and module declarations.

use workertypes_manifest::Bindings;

use crate::{
    ast::{AmbientModule, InterfaceField},
    type_mapper::{BindingType, TypeScriptTypeMapper},
};

/// Everything the declaration file describes, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeDefinitions {
    /// Members of the environment (`interface Env` or global consts).
    pub env: Vec<InterfaceField>,
    /// Ambient module declarations from import rules.
    pub modules: Vec<AmbientModule>,
}

impl TypeDefinitions {
    /// Map every binding and import rule to its declaration.
    ///
    /// Kinds are visited in [`BindingKind::ALL`](workertypes_manifest::BindingKind::ALL)
    /// order and bindings within a kind in declaration order, so equal
    /// configurations always give equal output. Nothing here can fail.
    pub fn from_bindings(bindings: &Bindings) -> Self {
        Self {
            env: env_members(bindings),
            modules: module_declarations(bindings),
        }
    }

    /// Check if there is nothing to declare.
    pub fn is_empty(&self) -> bool {
        self.env.is_empty() && self.modules.is_empty()
    }

    /// Environment members as `name: type;` lines.
    pub fn env_lines(&self) -> Vec<String> {
        self.env.iter().map(InterfaceField::to_member).collect()
    }
}

fn env_members(bindings: &Bindings) -> Vec<InterfaceField> {
    let mapper = TypeScriptTypeMapper;
    let mut members = Vec::new();

    for kind in workertypes_manifest::BindingKind::ALL {
        match mapper.map_binding(kind) {
            BindingType::Fixed(ty) => {
                members.extend(
                    bindings
                        .names(kind)
                        .into_iter()
                        .map(|name| InterfaceField::new(name, ty)),
                );
            }
            BindingType::Literal => {
                members.extend(
                    bindings
                        .vars
                        .iter()
                        .map(|(name, value)| InterfaceField::new(name, mapper.literal_type(value))),
                );
            }
            BindingType::Shared { name, ty } => {
                if !bindings.names(kind).is_empty() {
                    members.push(InterfaceField::new(name, ty));
                }
            }
        }
    }

    members
}

fn module_declarations(bindings: &Bindings) -> Vec<AmbientModule> {
    let mapper = TypeScriptTypeMapper;

    bindings
        .rules
        .iter()
        .filter_map(|rule| mapper.map_rule(rule.kind).map(|ty| (rule, ty)))
        .flat_map(|(rule, ty)| {
            rule.globs
                .iter()
                .map(move |glob| AmbientModule::new(format!("*.{}", extension(glob)), ty))
        })
        .collect()
}

/// Text after the last `.` of a glob, or the whole glob if it has none.
fn extension(glob: &str) -> &str {
    glob.rsplit('.').next().unwrap_or(glob)
}
