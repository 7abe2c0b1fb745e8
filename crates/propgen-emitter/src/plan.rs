//! Serializable class plans handed to source emitters.

use crate::naming::{ClassNameResolver, NamingError};
use crate::retain::RetainCode;
use propgen_model::{Attribute, Field, InterfaceDefinition, PlainMethod, RetainType};
use propgen_solver::TypeOracle;
use serde::Serialize;
use tracing::debug;

/// Everything an emitter needs to write the concrete and abstract classes
/// for one interface. Types are rendered as source text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassPlan {
    pub package: String,
    pub interface_name: String,
    pub class_name: String,
    pub abstract_class_name: String,
    pub type_parameters: Vec<TypeParameterPlan>,
    /// The interface extends a capability marker; the class must provide
    /// change-notification support itself.
    pub capability_aware: bool,
    pub capability_supertypes: Vec<String>,
    pub fields: Vec<FieldPlan>,
    pub methods: Vec<MethodPlan>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeParameterPlan {
    pub name: String,
    pub bounds: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldPlan {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub real_type: String,
    pub readable: bool,
    pub writable: bool,
    pub ignored: bool,
    pub read_only: bool,
    pub method_modifier: String,
    pub retain: RetainType,
    /// Expression that stores an argument named like the field.
    pub capture: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterPlan {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodPlan {
    pub name: String,
    pub declared_in: String,
    pub type_parameters: Vec<String>,
    pub return_type: String,
    pub parameters: Vec<ParameterPlan>,
    /// `<R> R convert(T arg0)`
    pub signature: String,
}

impl ClassPlan {
    pub fn build(
        definition: &InterfaceDefinition,
        oracle: &dyn TypeOracle,
        resolver: &ClassNameResolver,
    ) -> Result<ClassPlan, NamingError> {
        let interface_name = definition.simple_name();
        let class_name = resolver.class_name_for(interface_name)?;
        let abstract_class_name = resolver.abstract_class_name_for(interface_name)?;
        debug!(
            interface = interface_name,
            class = %class_name,
            abstract_class = %abstract_class_name,
            "resolved class names"
        );

        let type_parameters = definition
            .type_parameters()
            .iter()
            .map(|param| TypeParameterPlan {
                name: param.name.clone(),
                bounds: param.bounds.iter().map(|&bound| oracle.display(bound)).collect(),
            })
            .collect();

        let fields = definition
            .properties()
            .iter()
            .map(|property| {
                let field = Field::from_property(property);
                FieldPlan {
                    name: field.name().to_string(),
                    ty: oracle.display(field.declared_type()),
                    real_type: oracle.display(field.real_type()),
                    readable: property.is_readable(),
                    writable: property.is_writable(),
                    ignored: property.is_ignored(),
                    read_only: field.read_only,
                    method_modifier: field.method_modifier().to_string(),
                    retain: property.retain(),
                    capture: property.retain().code_for(field.name(), &field, oracle),
                }
            })
            .collect();

        let methods = definition
            .methods()
            .iter()
            .map(|method| MethodPlan::build(method, oracle))
            .collect();

        Ok(ClassPlan {
            package: definition.package().to_string(),
            interface_name: interface_name.to_string(),
            class_name,
            abstract_class_name,
            type_parameters,
            capability_aware: definition.is_capability_aware(),
            capability_supertypes: definition
                .capability_supertypes()
                .iter()
                .map(|&ty| oracle.display(ty))
                .collect(),
            fields,
            methods,
        })
    }

    /// `package.ClassName`, or just the class name in the default package.
    pub fn qualified_class_name(&self) -> String {
        if self.package.is_empty() {
            self.class_name.clone()
        } else {
            format!("{}.{}", self.package, self.class_name)
        }
    }
}

impl MethodPlan {
    fn build(plain: &PlainMethod, oracle: &dyn TypeOracle) -> MethodPlan {
        let method = &plain.method;
        let return_type = oracle.display(method.return_type);
        let parameters: Vec<ParameterPlan> = method
            .parameters
            .iter()
            .map(|param| ParameterPlan {
                name: param.name.clone(),
                ty: oracle.display(param.ty),
            })
            .collect();

        let mut signature = String::new();
        if !method.type_parameters.is_empty() {
            signature.push('<');
            signature.push_str(&method.type_parameters.join(", "));
            signature.push_str("> ");
        }
        signature.push_str(&return_type);
        signature.push(' ');
        signature.push_str(&method.name);
        signature.push('(');
        let rendered: Vec<String> = parameters
            .iter()
            .map(|param| format!("{} {}", param.ty, param.name))
            .collect();
        signature.push_str(&rendered.join(", "));
        signature.push(')');

        MethodPlan {
            name: method.name.clone(),
            declared_in: oracle.display(plain.declared_in),
            type_parameters: method.type_parameters.clone(),
            return_type,
            parameters,
            signature,
        }
    }
}
