//! Tool definitions module.
//!
//! Every tool is a static [`EndpointDescriptor`]; files are grouped by API
//! area. [`DESCRIPTORS`] is the registration order exposed to clients.

pub mod private_qod;
pub mod private_quotes;
pub mod qshow;
pub mod quote;
pub mod quote_images;
pub mod quote_of_the_day;

use super::descriptor::EndpointDescriptor;

pub(crate) const PAGE_START: &str =
    "Response is paged. This parameter controls where response starts the listing at";
pub(crate) const COMMA_TAGS: &str = "Comma Separated tags";

/// All tools served by this server, in registration order.
pub static DESCRIPTORS: &[EndpointDescriptor] = &[
    private_quotes::PATCH_QUOTE,
    private_quotes::PUT_QUOTE,
    private_quotes::POST_QUOTE_TAGS_REMOVE,
    private_quotes::POST_QUOTE,
    private_quotes::GET_QUOTE_LIST,
    private_quotes::POST_QUOTE_TAGS_ADD,
    private_qod::PATCH_QOD,
    private_qod::PUT_QOD,
    quote_images::GET_QUOTE_IMAGE_FONT_SEARCH,
    quote_images::GET_QUOTE_IMAGE,
    quote_images::GET_QUOTE_IMAGE_BACKGROUND_SEARCH,
    quote_images::POST_QUOTE_IMAGE_BACKGROUND_TAGS_REMOVE,
    quote_images::POST_QUOTE_IMAGE_FONT_TAGS_ADD,
    quote_images::GET_QUOTE_IMAGE_SEARCH,
    quote_images::GET_QUOTE_IMAGE_FONT_LIST,
    quote_images::POST_QUOTE_IMAGE_BACKGROUND_TAGS_ADD,
    quote_images::PUT_QUOTE_IMAGE,
    quote_images::POST_QUOTE_IMAGE_FONT_TAGS_REMOVE,
    quote_images::GET_QUOTE_IMAGE_BACKGROUND_LIST,
    qshow::POST_QSHOW_QUOTES_REMOVE,
    qshow::GET_QSHOW_QUOTES,
    qshow::GET_QSHOW,
    qshow::POST_QSHOW_QUOTES_ADD,
    qshow::GET_QSHOW_LIST,
    qshow::PUT_QSHOW,
    qshow::PATCH_QSHOW,
    quote::GET_QUOTE_CATEGORIES_POPULAR,
    quote::GET_QUOTE_AUTHORS_POPULAR,
    quote::GET_QUOTE_AUTHORS_SEARCH,
    quote::GET_QUOTE_RANDOM,
    quote::GET_QUOTE_CATEGORIES_SEARCH,
    quote::GET_QUOTE_LIKE_TOGGLE,
    quote::GET_QUOTE_BOOKMARK_TOGGLE,
    quote::GET_QUOTE_SEARCH,
    quote::GET_QUOTE,
    quote_of_the_day::GET_QOD_CATEGORIES,
    quote_of_the_day::GET_QOD_LANGUAGES,
    quote_of_the_day::GET_QOD,
];
