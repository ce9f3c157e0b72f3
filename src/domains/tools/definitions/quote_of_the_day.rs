//! Public Quote of the Day (QOD).

use crate::domains::tools::descriptor::{EndpointDescriptor, HttpMethod, ParamKind, ParamSpec};

pub const GET_QOD_CATEGORIES: EndpointDescriptor = EndpointDescriptor {
    name: "get-qod-categories",
    method: HttpMethod::Get,
    path: "/qod/categories",
    description: "Gets a list of `Quote of the Day` Categories.",
    params: &[
        ParamSpec::query(
            "language",
            ParamKind::String,
            "Language of the QOD category. The language must be supported in our QOD system.",
        ),
        ParamSpec::query(
            "detailed",
            ParamKind::Boolean,
            "Return detailed information of the categories. Note the data format changes between the two values of this switch.",
        ),
    ],
};

pub const GET_QOD_LANGUAGES: EndpointDescriptor = EndpointDescriptor {
    name: "get-qod-languages",
    method: HttpMethod::Get,
    path: "/qod/languages",
    description: "Get list of languages supported in `Quote of the Day` service.",
    params: &[],
};

pub const GET_QOD: EndpointDescriptor = EndpointDescriptor {
    name: "get-qod",
    method: HttpMethod::Get,
    path: "/qod",
    description: "Gets `Quote of the Day` (QOD). Optional `category` param determines the category of returned quote of the day",
    params: &[
        ParamSpec::query("category", ParamKind::String, "QOD Category (Used in public QOD only)"),
        ParamSpec::query(
            "language",
            ParamKind::String,
            "Language of the QOD. The language must be supported in our QOD system.",
        ),
        ParamSpec::query("id", ParamKind::String, "QOD defition id (Used in private QOD only)"),
    ],
};
