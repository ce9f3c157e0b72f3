//! Private quote collection: create, update, tag and list your own quotes.

use super::{COMMA_TAGS, PAGE_START};
use crate::domains::tools::descriptor::{EndpointDescriptor, HttpMethod, ParamKind, ParamSpec};

const QUOTE_LANGUAGE: &str =
    "Language. If not supplied an auto detection mechanism will be used to detect a language.";

pub const PATCH_QUOTE: EndpointDescriptor = EndpointDescriptor {
    name: "patch-quote",
    method: HttpMethod::Patch,
    path: "/quote",
    description: "Update a quote",
    params: &[
        ParamSpec::body("id", ParamKind::String, "Quote ID").required(),
        ParamSpec::body("quote", ParamKind::String, "Quote"),
        ParamSpec::body("author", ParamKind::String, "Quote Author"),
        ParamSpec::body("language", ParamKind::String, QUOTE_LANGUAGE),
        ParamSpec::body("tags", ParamKind::String, COMMA_TAGS),
    ],
};

pub const PUT_QUOTE: EndpointDescriptor = EndpointDescriptor {
    name: "put-quote",
    method: HttpMethod::Put,
    path: "/quote",
    description: "Add a new quote to your private collection.",
    params: &[
        ParamSpec::body("quote", ParamKind::String, "Quote").required(),
        ParamSpec::body("author", ParamKind::String, "Quote Author"),
        ParamSpec::body("tags", ParamKind::String, COMMA_TAGS),
        ParamSpec::body("language", ParamKind::String, QUOTE_LANGUAGE),
    ],
};

pub const POST_QUOTE_TAGS_REMOVE: EndpointDescriptor = EndpointDescriptor {
    name: "post-quote-tags-remove",
    method: HttpMethod::Post,
    path: "/quote/tags/remove",
    description: "Remove a tag from a given quote.",
    params: &[
        ParamSpec::body("id", ParamKind::String, "Quote ID").required(),
        ParamSpec::body("tags", ParamKind::String, COMMA_TAGS).required(),
    ],
};

pub const POST_QUOTE: EndpointDescriptor = EndpointDescriptor {
    name: "post-quote",
    method: HttpMethod::Post,
    path: "/quote",
    description: "Add a new quote to your private collection. Same as 'PUT' but added since some clients don't handle PUT well.",
    params: &[
        ParamSpec::body("quote", ParamKind::String, "Quote").required(),
        ParamSpec::body("author", ParamKind::String, "Quote Author"),
        ParamSpec::body("tags", ParamKind::String, COMMA_TAGS),
        ParamSpec::body("language", ParamKind::String, QUOTE_LANGUAGE),
    ],
};

pub const GET_QUOTE_LIST: EndpointDescriptor = EndpointDescriptor {
    name: "get-quote-list",
    method: HttpMethod::Get,
    path: "/quote/list",
    description: "List the quotes in your private collection.",
    params: &[ParamSpec::query("start", ParamKind::Number, PAGE_START)],
};

pub const POST_QUOTE_TAGS_ADD: EndpointDescriptor = EndpointDescriptor {
    name: "post-quote-tags-add",
    method: HttpMethod::Post,
    path: "/quote/tags/add",
    description: "Add a tag to a given quote.",
    params: &[
        ParamSpec::body("id", ParamKind::String, "Quote ID").required(),
        ParamSpec::body("tags", ParamKind::String, COMMA_TAGS).required(),
    ],
};
