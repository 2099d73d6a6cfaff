//! Method and constructor body statements.

use mirage_codegen::builder::CodeFragment;
use mirage_core::quote_single;
use mirage_ir::{PropertyNode, RpcCall, Statement};

use super::{param::binding, property::object_literal};

/// Render one body statement.
pub fn statement(stmt: &Statement) -> CodeFragment {
    let line = match stmt {
        Statement::SuperCall { args } => format!("super({});", bindings(args)),
        Statement::Comment { text } => format!("// {}", text),
        Statement::Subscribe { property } => format!(
            "this.${}.subscribe(value => this.On{}Change(value));",
            property, property
        ),
        Statement::AssignIfPresent { param, property } => {
            let param = binding(param);
            format!("if ({} !== null) this.{} = {};", param, property, param)
        }
        Statement::Construct {
            property,
            type_name,
            args,
        } => format!("this.{} = new {}({});", property, type_name, bindings(args)),
        Statement::Rpc {
            call,
            method,
            returns,
        } => match call {
            RpcCall::FireAndForget => {
                format!("this.service.{}('{}', arguments);", call.helper(), method)
            }
            RpcCall::Stream | RpcCall::Value => format!(
                "return <{}> this.service.{}('{}', arguments);",
                returns,
                call.helper(),
                method
            ),
        },
        Statement::ServiceRequest {
            verb,
            url,
            policy,
            args,
            payload,
            returns_value,
        } => service_request(verb, url, policy, args, payload, *returns_value),
        Statement::Throw { message } => format!("throw new Error(\"{}\");", message),
    };
    CodeFragment::line(line)
}

fn bindings(args: &[String]) -> String {
    args.iter()
        .map(|a| binding(a))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `return this.serviceRequest('GET', `prefix/items/${id}`, 'policy', id, {id});`
fn service_request(
    verb: &str,
    url: &str,
    policy: &str,
    args: &[String],
    payload: &[PropertyNode],
    returns_value: bool,
) -> String {
    let mut url = url.to_string();
    for arg in args {
        let bound = binding(arg);
        if bound != *arg {
            url = url.replace(&format!("${{{}}}", arg), &format!("${{{}}}", bound));
        }
    }

    let payload: Vec<PropertyNode> = payload
        .iter()
        .map(|member| {
            let value = member.default.as_deref().unwrap_or(&member.name);
            PropertyNode::assignment(&member.name, binding(value))
        })
        .collect();

    let mut call_args = vec![
        format!("'{}'", verb),
        format!("`{}`", url),
        quote_single(policy),
    ];
    call_args.extend(args.iter().map(|a| binding(a)));
    call_args.push(object_literal(&payload));

    let call = format!("this.serviceRequest({});", call_args.join(", "));
    if returns_value {
        format!("return {}", call)
    } else {
        call
    }
}
