//! Qshows: named collections of quotes.

use super::PAGE_START;
use crate::domains::tools::descriptor::{EndpointDescriptor, HttpMethod, ParamKind, ParamSpec};

pub const POST_QSHOW_QUOTES_REMOVE: EndpointDescriptor = EndpointDescriptor {
    name: "post-qshow-quotes-remove",
    method: HttpMethod::Post,
    path: "/qshow/quotes/remove",
    description: "Remove a quote to a given Qshow.",
    params: &[
        ParamSpec::body("id", ParamKind::String, "Qshow ID").required(),
        ParamSpec::body(
            "quoteid",
            ParamKind::String,
            "Quote ID to remove from the qshow collection",
        )
        .required(),
    ],
};

pub const GET_QSHOW_QUOTES: EndpointDescriptor = EndpointDescriptor {
    name: "get-qshow-quotes",
    method: HttpMethod::Get,
    path: "/qshow/quotes",
    description: "Get the quotes in a given Qshow.",
    params: &[
        ParamSpec::query("id", ParamKind::String, "Qshow ID").required(),
        ParamSpec::query("start", ParamKind::Number, PAGE_START),
    ],
};

pub const GET_QSHOW: EndpointDescriptor = EndpointDescriptor {
    name: "get-qshow",
    method: HttpMethod::Get,
    path: "/qshow",
    description: "Get a Qshow with the given id.",
    params: &[ParamSpec::query("id", ParamKind::String, "Qshow ID").required()],
};

pub const POST_QSHOW_QUOTES_ADD: EndpointDescriptor = EndpointDescriptor {
    name: "post-qshow-quotes-add",
    method: HttpMethod::Post,
    path: "/qshow/quotes/add",
    description: "Add a quote to a given Qshow.",
    params: &[
        ParamSpec::body("id", ParamKind::String, "Qshow ID").required(),
        ParamSpec::body("quoteid", ParamKind::String, "Quote ID to add to the qshow collection")
            .required(),
    ],
};

pub const GET_QSHOW_LIST: EndpointDescriptor = EndpointDescriptor {
    name: "get-qshow-list",
    method: HttpMethod::Get,
    path: "/qshow/list",
    description: "Get the list of Qshows in They Said So platform.",
    params: &[
        ParamSpec::query("start", ParamKind::Number, PAGE_START),
        ParamSpec::query(
            "public",
            ParamKind::Boolean,
            "Should include public qshows or not in the list",
        ),
    ],
};

pub const PUT_QSHOW: EndpointDescriptor = EndpointDescriptor {
    name: "put-qshow",
    method: HttpMethod::Put,
    path: "/qshow",
    description: "Create and add a new qshow to your private collection.",
    params: &[
        ParamSpec::body("title", ParamKind::String, "Qshow title").required(),
        ParamSpec::body("description", ParamKind::String, "Qshow description"),
        ParamSpec::body("tags", ParamKind::String, "Tags for the qshow"),
    ],
};

pub const PATCH_QSHOW: EndpointDescriptor = EndpointDescriptor {
    name: "patch-qshow",
    method: HttpMethod::Patch,
    path: "/qshow",
    description: "Update an existing qshow.",
    params: &[
        ParamSpec::body("id", ParamKind::String, "Qshow ID").required(),
        ParamSpec::body("title", ParamKind::String, "Qshow title"),
        ParamSpec::body("description", ParamKind::String, "Qshow description"),
        ParamSpec::body("tags", ParamKind::String, "Tags for the qshow"),
    ],
};
