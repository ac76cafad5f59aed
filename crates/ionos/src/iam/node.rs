//! IAM node: users, groups and per-user object-storage keys.

use super::config::{Operation, Resource, Selector, UserFields};
use crate::credentials::CredentialKind;
use async_trait::async_trait;
use flowgrid_core::credential::CredentialRecord;
use flowgrid_core::descriptor::{NodeDescriptor, Property};
use flowgrid_core::item::Item;
use flowgrid_core::node::{Error, Node};
use flowgrid_core::parameter::ParameterMap;
use flowgrid_core::request::RequestDescriptor;
use flowgrid_core::response::{success_record, unwrap_collection};
use flowgrid_core::transport::Transport;
use serde_json::{json, Value};
use tracing::debug;

/// Cloud API origin used by this node.
pub const BASE_URL: &str = "https://api.ionos.com/cloudapi/v6";

const DEFAULT_DEPTH: u64 = 1;

/// Manage users and groups of the account.
#[derive(Debug, Clone, Copy, Default)]
pub struct IamNode;

impl IamNode {
    pub fn new() -> Self {
        IamNode
    }
}

pub fn descriptor() -> NodeDescriptor {
    NodeDescriptor::new(
        "iam",
        "IONOS User Management",
        "Manage users, groups and object-storage keys",
        CredentialKind::CloudToken.name(),
    )
    .property(
        Property::options("resource", "Resource")
            .choice("User", "user")
            .choice("Group", "group")
            .choice("S3 Key", "s3Key")
            .default_value(json!("user")),
    )
    .property(
        Property::options("operation", "Operation")
            .choice("Create", "create")
            .choice("Delete", "delete")
            .choice("Get", "get")
            .choice("Get Many", "getMany")
            .choice("Update", "update")
            .default_value(json!("getMany")),
    )
    .property(
        Property::string("userId", "User ID")
            .required()
            .show_when("resource", &["user"])
            .show_when("operation", &["get", "update", "delete"]),
    )
    .property(
        Property::string("userId", "User ID")
            .required()
            .show_when("resource", &["s3Key"]),
    )
    .property(
        Property::string("groupId", "Group ID")
            .required()
            .show_when("resource", &["group"])
            .show_when("operation", &["get", "delete"]),
    )
    .property(
        Property::string("firstname", "First Name")
            .required()
            .show_when("resource", &["user"])
            .show_when("operation", &["create", "update"]),
    )
    .property(
        Property::string("lastname", "Last Name")
            .required()
            .show_when("resource", &["user"])
            .show_when("operation", &["create", "update"]),
    )
    .property(
        Property::string("email", "Email")
            .required()
            .show_when("resource", &["user"])
            .show_when("operation", &["create", "update"]),
    )
    .property(
        Property::string("password", "Password")
            .show_when("resource", &["user"])
            .show_when("operation", &["create", "update"]),
    )
    .property(
        Property::boolean("administrator", "Administrator")
            .default_value(json!(false))
            .show_when("resource", &["user"])
            .show_when("operation", &["create", "update"]),
    )
    .property(
        Property::boolean("effectivePolicy", "Effective Policy")
            .default_value(json!(false))
            .description("Resolve the group's effective permission set")
            .show_when("resource", &["group"])
            .show_when("operation", &["get"]),
    )
    .property(
        Property::number("depth", "Depth")
            .default_value(json!(1))
            .range(0, 10)
            .show_when("operation", &["get", "getMany"]),
    )
    .property(
        Property::boolean("returnAll", "Return All")
            .default_value(json!(false))
            .show_when("operation", &["getMany"]),
    )
    .property(
        Property::number("limit", "Limit")
            .default_value(json!(50))
            .range(1, 1000)
            .show_when("operation", &["getMany"])
            .show_when("returnAll", &["false"]),
    )
}

fn user_body(fields: &UserFields) -> Value {
    let mut properties = json!({
        "firstname": fields.firstname,
        "lastname": fields.lastname,
        "email": fields.email,
        "administrator": fields.administrator,
    });
    if let Some(password) = &fields.password {
        properties["password"] = json!(password);
    }
    json!({ "properties": properties })
}

pub fn build_request(selector: &Selector, params: &ParameterMap) -> Result<RequestDescriptor, Error> {
    let depth = params.u64_or("depth", DEFAULT_DEPTH);
    match (selector.resource, selector.operation) {
        (Resource::User, Operation::GetMany) => {
            Ok(RequestDescriptor::get(format!("{BASE_URL}/um/users"))
                .query("depth", depth)
                .query_opt("limit", params.page_limit()))
        }
        (Resource::User, Operation::Get) => {
            let id = params.string("userId")?;
            Ok(RequestDescriptor::get(format!("{BASE_URL}/um/users/{id}")).query("depth", depth))
        }
        (Resource::User, Operation::Create) => {
            let fields: UserFields = params.typed()?;
            Ok(RequestDescriptor::post(format!("{BASE_URL}/um/users")).body(user_body(&fields)))
        }
        (Resource::User, Operation::Update) => {
            let id = params.string("userId")?;
            let fields: UserFields = params.typed()?;
            Ok(RequestDescriptor::put(format!("{BASE_URL}/um/users/{id}")).body(user_body(&fields)))
        }
        (Resource::User, Operation::Delete) => {
            let id = params.string("userId")?;
            Ok(RequestDescriptor::delete(format!("{BASE_URL}/um/users/{id}")))
        }
        (Resource::Group, Operation::GetMany) => {
            Ok(RequestDescriptor::get(format!("{BASE_URL}/um/groups"))
                .query("depth", depth)
                .query_opt("limit", params.page_limit()))
        }
        (Resource::Group, Operation::Get) => {
            let id = params.string("groupId")?;
            let mut request =
                RequestDescriptor::get(format!("{BASE_URL}/um/groups/{id}")).query("depth", depth);
            if params.bool_or("effectivePolicy", false) {
                request = request.query("effectivePolicy", true);
            }
            Ok(request)
        }
        (Resource::Group, Operation::Delete) => {
            let id = params.string("groupId")?;
            Ok(RequestDescriptor::delete(format!("{BASE_URL}/um/groups/{id}")))
        }
        (Resource::S3Key, Operation::GetMany) => {
            let user_id = params.string("userId")?;
            Ok(RequestDescriptor::get(format!(
                "{BASE_URL}/um/users/{user_id}/s3keys"
            )))
        }
        _ => Err(Error::UnsupportedOperation {
            resource: format!("{:?}", selector.resource),
            operation: format!("{:?}", selector.operation),
        }),
    }
}

fn shape(selector: &Selector, params: &ParameterMap, response: Value) -> Result<Vec<Value>, Error> {
    match (selector.resource, selector.operation) {
        (Resource::User, Operation::Delete) => {
            let id = params.string("userId")?;
            Ok(vec![success_record(Some(("userId", &id)))])
        }
        (Resource::Group, Operation::Delete) => {
            let id = params.string("groupId")?;
            Ok(vec![success_record(Some(("groupId", &id)))])
        }
        _ => Ok(unwrap_collection(response)),
    }
}

#[async_trait]
impl Node for IamNode {
    fn descriptor(&self) -> NodeDescriptor {
        descriptor()
    }

    async fn execute(
        &self,
        transport: &dyn Transport,
        credential: &CredentialRecord,
        item: &Item,
    ) -> Result<Vec<Value>, Error> {
        let selector: Selector = item.parameters.typed()?;
        let request = build_request(&selector, &item.parameters)?;
        debug!(method = request.method.as_str(), url = %request.url, "IAM request");
        let response = transport.execute(credential, request).await?;
        shape(&selector, &item.parameters, response)
    }
}
