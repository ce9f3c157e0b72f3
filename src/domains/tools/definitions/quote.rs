//! Public quote catalogue: lookup, search, authors, categories and user toggles.

use super::PAGE_START;
use crate::domains::tools::descriptor::{EndpointDescriptor, HttpMethod, ParamKind, ParamSpec};

const QUOTE_LANGUAGE: &str =
    "Language of the Quote. The language must be supported in our system.";
const PAGE_LIMIT: &str = "Response is paged. This parameter controls how many is returned in the result. The maximum depends on the subscription level.";
const DETAILED_AUTHORS: &str = "Should return detailed author information such as `birthday`, `death date`, `occupation`, `description` etc. Only available at certain subscription levels.";
const QUOTE_LIMIT: &str =
    "No of quotes to return. The max limit depends on the subscription level.";

pub const GET_QUOTE_CATEGORIES_POPULAR: EndpointDescriptor = EndpointDescriptor {
    name: "get-quote-categories-popular",
    method: HttpMethod::Get,
    path: "/quote/categories/popular",
    description: "Gets a list of popular categories in the system.",
    params: &[
        ParamSpec::query("language", ParamKind::String, QUOTE_LANGUAGE),
        ParamSpec::query("start", ParamKind::Number, PAGE_START),
        ParamSpec::query("limit", ParamKind::Number, PAGE_LIMIT),
        ParamSpec::query(
            "detailed",
            ParamKind::Boolean,
            "Should return detailed category information. Only available at certain subscription levels.",
        ),
    ],
};

pub const GET_QUOTE_AUTHORS_POPULAR: EndpointDescriptor = EndpointDescriptor {
    name: "get-quote-authors-popular",
    method: HttpMethod::Get,
    path: "/quote/authors/popular",
    description: "Gets a list of popular author names in the system.",
    params: &[
        ParamSpec::query("language", ParamKind::String, QUOTE_LANGUAGE),
        ParamSpec::query("start", ParamKind::Number, PAGE_START),
        ParamSpec::query("limit", ParamKind::Number, PAGE_LIMIT),
        ParamSpec::query("detailed", ParamKind::Boolean, DETAILED_AUTHORS),
    ],
};

pub const GET_QUOTE_AUTHORS_SEARCH: EndpointDescriptor = EndpointDescriptor {
    name: "get-quote-authors-search",
    method: HttpMethod::Get,
    path: "/quote/authors/search",
    description: "Gets a list of author names in the system.",
    params: &[
        ParamSpec::query("query", ParamKind::String, "Text string to search for in author names"),
        ParamSpec::query(
            "language",
            ParamKind::String,
            "Language. A same author may have quotes in two or more different languages. So for example 'Mahatma Gandhi' may be returned for language \"en\"(English), and \"மஹாத்மா காந்தி\" may be returned when the language is \"ta\" (Tamil).",
        ),
        ParamSpec::query("start", ParamKind::Number, PAGE_START),
        ParamSpec::query("limit", ParamKind::Number, PAGE_LIMIT),
        ParamSpec::query("detailed", ParamKind::Boolean, DETAILED_AUTHORS),
    ],
};

pub const GET_QUOTE_RANDOM: EndpointDescriptor = EndpointDescriptor {
    name: "get-quote-random",
    method: HttpMethod::Get,
    path: "/quote/random",
    description: "Gets a `Random Quote`. When you are in a hurry this is what you call to get a random famous quote.",
    params: &[
        ParamSpec::query("language", ParamKind::String, QUOTE_LANGUAGE),
        ParamSpec::query("limit", ParamKind::Number, QUOTE_LIMIT),
    ],
};

pub const GET_QUOTE_CATEGORIES_SEARCH: EndpointDescriptor = EndpointDescriptor {
    name: "get-quote-categories-search",
    method: HttpMethod::Get,
    path: "/quote/categories/search",
    description: "Gets a list of categories in the system.",
    params: &[
        ParamSpec::query("query", ParamKind::String, "Text string to search for in categories"),
        ParamSpec::query("language", ParamKind::String, QUOTE_LANGUAGE),
        ParamSpec::query("start", ParamKind::Number, PAGE_START),
        ParamSpec::query("limit", ParamKind::Number, PAGE_LIMIT),
    ],
};

pub const GET_QUOTE_LIKE_TOGGLE: EndpointDescriptor = EndpointDescriptor {
    name: "get-quote-like-toggle",
    method: HttpMethod::Get,
    path: "/quote/like/toggle",
    description: "Toggle the user like of the given Quote as a user of the API Key.",
    params: &[ParamSpec::query("quote_id", ParamKind::String, "Quote ID").required()],
};

pub const GET_QUOTE_BOOKMARK_TOGGLE: EndpointDescriptor = EndpointDescriptor {
    name: "get-quote-bookmark-toggle",
    method: HttpMethod::Get,
    path: "/quote/bookmark/toggle",
    description: "Toggle the user bookmark of the given Quote as a user of the API Key.",
    params: &[ParamSpec::query("quote_id", ParamKind::String, "Quote ID").required()],
};

pub const GET_QUOTE_SEARCH: EndpointDescriptor = EndpointDescriptor {
    name: "get-quote-search",
    method: HttpMethod::Get,
    path: "/quote/search",
    description: "Search for a `Quote` in They Said So platform. Optional `category` , `author`, `minlength`, `maxlength` params determines the filters applied while searching for the quote.",
    params: &[
        ParamSpec::query("category", ParamKind::String, "Quote Category"),
        ParamSpec::query("author", ParamKind::String, "Quote Author"),
        ParamSpec::query("query", ParamKind::String, "keyword to search for in the quote"),
        ParamSpec::query("language", ParamKind::String, QUOTE_LANGUAGE),
        ParamSpec::query("minlength", ParamKind::Number, "Quote minimum Length"),
        ParamSpec::query("maxlength", ParamKind::Number, "Quote maximum Length"),
        ParamSpec::query("limit", ParamKind::Number, QUOTE_LIMIT),
        ParamSpec::query(
            "private",
            ParamKind::Boolean,
            "Should search private collection? Default searches public collection.",
        ),
        ParamSpec::query(
            "sfw",
            ParamKind::Boolean,
            "Should search only SFW (Safe For Work) quotes?",
        ),
    ],
};

pub const GET_QUOTE: EndpointDescriptor = EndpointDescriptor {
    name: "get-quote",
    method: HttpMethod::Get,
    path: "/quote",
    description: "Gets a `Quote` with a given `id`.",
    params: &[ParamSpec::query("id", ParamKind::String, "Quote ID").required()],
};
