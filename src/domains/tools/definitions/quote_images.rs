//! Quote images: generation, lookup, fonts and background images.

use super::{COMMA_TAGS, PAGE_START};
use crate::domains::tools::descriptor::{EndpointDescriptor, HttpMethod, ParamKind, ParamSpec};

pub const GET_QUOTE_IMAGE_FONT_SEARCH: EndpointDescriptor = EndpointDescriptor {
    name: "get-quote-image-font-search",
    method: HttpMethod::Get,
    path: "/quote/image/font/search",
    description: "Search for fonts in your private collection.",
    params: &[
        ParamSpec::query("query", ParamKind::String, "Text to search for in font names and tags"),
        ParamSpec::query("start", ParamKind::Number, PAGE_START),
    ],
};

pub const GET_QUOTE_IMAGE: EndpointDescriptor = EndpointDescriptor {
    name: "get-quote-image",
    method: HttpMethod::Get,
    path: "/quote/image",
    description: "Gets a Quote image for a given id. Response can be an image file as a binary or a base64 encoded contents wrapped in json.",
    params: &[
        ParamSpec::query("id", ParamKind::String, "Quote Image id").required(),
        ParamSpec::query(
            "binary",
            ParamKind::Boolean,
            "Should the response be a direct file download of the image or a base64 encoded image file wrapped in json?",
        ),
    ],
};

pub const GET_QUOTE_IMAGE_BACKGROUND_SEARCH: EndpointDescriptor = EndpointDescriptor {
    name: "get-quote-image-background-search",
    method: HttpMethod::Get,
    path: "/quote/image/background/search",
    description: "Search for background images in your private collection.",
    params: &[
        ParamSpec::query(
            "query",
            ParamKind::String,
            "Text to search for in background image names and tags",
        ),
        ParamSpec::query("start", ParamKind::Number, PAGE_START),
    ],
};

pub const POST_QUOTE_IMAGE_BACKGROUND_TAGS_REMOVE: EndpointDescriptor = EndpointDescriptor {
    name: "post-quote-image-background-tags-remove",
    method: HttpMethod::Post,
    path: "/quote/image/background/tags/remove",
    description: "Remove a tag from a given Image.",
    params: &[
        ParamSpec::body("id", ParamKind::String, "Image ID").required(),
        ParamSpec::body("tags", ParamKind::String, COMMA_TAGS).required(),
    ],
};

pub const POST_QUOTE_IMAGE_FONT_TAGS_ADD: EndpointDescriptor = EndpointDescriptor {
    name: "post-quote-image-font-tags-add",
    method: HttpMethod::Post,
    path: "/quote/image/font/tags/add",
    description: "Add a tag to a given Font.",
    params: &[
        ParamSpec::body("id", ParamKind::String, "Font ID").required(),
        ParamSpec::body("tags", ParamKind::String, COMMA_TAGS).required(),
    ],
};

pub const GET_QUOTE_IMAGE_SEARCH: EndpointDescriptor = EndpointDescriptor {
    name: "get-quote-image-search",
    method: HttpMethod::Get,
    path: "/quote/image/search",
    description: "Gets a Random Quote image. Optional `category` param determines the category of quote used in the image. Optional `author` param gets the quote image of a given author.",
    params: &[
        ParamSpec::query("category", ParamKind::String, "Quote Category"),
        ParamSpec::query("author", ParamKind::String, "Quote Author"),
        ParamSpec::query(
            "private",
            ParamKind::Boolean,
            "Should search private collection. Default searches public image collection.",
        ),
    ],
};

pub const GET_QUOTE_IMAGE_FONT_LIST: EndpointDescriptor = EndpointDescriptor {
    name: "get-quote-image-font-list",
    method: HttpMethod::Get,
    path: "/quote/image/font/list",
    description: "Lists fonts in your private collection.",
    params: &[ParamSpec::query(
        "start",
        ParamKind::Number,
        "Response is paged. This parameter determines where the response should start.",
    )],
};

pub const POST_QUOTE_IMAGE_BACKGROUND_TAGS_ADD: EndpointDescriptor = EndpointDescriptor {
    name: "post-quote-image-background-tags-add",
    method: HttpMethod::Post,
    path: "/quote/image/background/tags/add",
    description: "Add a tag to a given Image.",
    params: &[
        ParamSpec::body("id", ParamKind::String, "Image ID").required(),
        ParamSpec::body("tags", ParamKind::String, COMMA_TAGS).required(),
    ],
};

pub const PUT_QUOTE_IMAGE: EndpointDescriptor = EndpointDescriptor {
    name: "put-quote-image",
    method: HttpMethod::Put,
    path: "/quote/image",
    description: "Create a new quote image for a given quote. Choose background colors/images , choose different font styles and generate a beautiful quote image. Did you just had a feeling of being a god or what?!",
    params: &[
        ParamSpec::body("quote_id", ParamKind::String, "Quote id").required(),
        ParamSpec::body(
            "bgimage_id",
            ParamKind::String,
            "Background Image id ( Will override bgcolor if supplied)",
        ),
        ParamSpec::body(
            "bg_color",
            ParamKind::String,
            "Background Color(if background image id is not supplied)",
        ),
        ParamSpec::body("font_id", ParamKind::String, "Font id"),
        ParamSpec::body("text_color", ParamKind::String, "Text Color"),
        ParamSpec::body("text_size", ParamKind::String, "Text/font size"),
        ParamSpec::body("halign", ParamKind::String, "Horizontal text Alignment Value"),
        ParamSpec::body("valign", ParamKind::String, "Vertical text Alignment Value"),
        ParamSpec::body(
            "width",
            ParamKind::Number,
            "Image Width(By default this takes the width of the background image)",
        ),
        ParamSpec::body(
            "height",
            ParamKind::Number,
            "Image Height(By default this takes the height of the background image)",
        ),
        ParamSpec::body(
            "branding",
            ParamKind::Boolean,
            "Disable They Said So branding (Only available in certain subscription levels. Ignored in other levels)",
        ),
        ParamSpec::body(
            "include_transparent_layer",
            ParamKind::Boolean,
            "Should include a transparent layer between the text and the background image? This helps when the background image is bright and obscures the text.",
        ),
    ],
};

pub const POST_QUOTE_IMAGE_FONT_TAGS_REMOVE: EndpointDescriptor = EndpointDescriptor {
    name: "post-quote-image-font-tags-remove",
    method: HttpMethod::Post,
    path: "/quote/image/font/tags/remove",
    description: "Remove a tag from a given Font.",
    params: &[
        ParamSpec::body("id", ParamKind::String, "Font ID").required(),
        ParamSpec::body("tags", ParamKind::String, COMMA_TAGS).required(),
    ],
};

pub const GET_QUOTE_IMAGE_BACKGROUND_LIST: EndpointDescriptor = EndpointDescriptor {
    name: "get-quote-image-background-list",
    method: HttpMethod::Get,
    path: "/quote/image/background/list",
    description: "Lists background images in your private collection.",
    params: &[ParamSpec::query(
        "start",
        ParamKind::Number,
        "Response is paged. This parameter determines where the response should start.",
    )],
};
