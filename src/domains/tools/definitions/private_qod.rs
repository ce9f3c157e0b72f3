//! Private Quote of the Day services built from your own filters.

use crate::domains::tools::descriptor::{EndpointDescriptor, HttpMethod, ParamKind, ParamSpec};

const AUTHORS: &str =
    "Comma seperated author names. Quotes will be chosen from one of these authors.";
const REPEAT_AFTER: &str = "How many days after the quotes can repeat? If you are setting this up from your private collection make sure you have more quotes that meet the filter conditions than the days you specify here.";
const PRIVATE: &str =
    "Should apply the filters to the private collection. Default is public quotes in the platform.";
const SFW: &str = "Consider only quotes marked as \"sfw\" (Safe for work).";

pub const PATCH_QOD: EndpointDescriptor = EndpointDescriptor {
    name: "patch-qod",
    method: HttpMethod::Patch,
    path: "/qod",
    description: "Update a private `Quote of the Day` service.",
    params: &[
        ParamSpec::body("id", ParamKind::String, "QOD definition id").required(),
        ParamSpec::body("authors", ParamKind::String, AUTHORS),
        ParamSpec::body("title", ParamKind::String, "Title of the Quote of the day category"),
        ParamSpec::body("language", ParamKind::String, "Quotes language."),
        ParamSpec::body("repeat_after", ParamKind::Number, REPEAT_AFTER),
        ParamSpec::body("private", ParamKind::Boolean, PRIVATE),
        ParamSpec::body("sfw", ParamKind::Boolean, SFW),
    ],
};

pub const PUT_QOD: EndpointDescriptor = EndpointDescriptor {
    name: "put-qod",
    method: HttpMethod::Put,
    path: "/qod",
    description: "Create a private `Quote of the Day` service.",
    params: &[
        ParamSpec::body("authors", ParamKind::String, AUTHORS),
        ParamSpec::body("title", ParamKind::String, "Title of the Quote of the day category")
            .required(),
        ParamSpec::body("language", ParamKind::String, "Quotes language."),
        ParamSpec::body("repeat_after", ParamKind::Number, REPEAT_AFTER),
        ParamSpec::body("private", ParamKind::Boolean, PRIVATE),
        ParamSpec::body("sfw", ParamKind::Boolean, SFW),
    ],
};
