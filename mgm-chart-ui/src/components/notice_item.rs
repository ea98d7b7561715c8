//! Notification-list row with a kind glyph and color.

use dioxus::prelude::*;
use mgm_data::Notice;

use crate::theme::slate;

/// Props for NoticeItem
#[derive(Props, Clone, PartialEq)]
pub struct NoticeItemProps {
    pub notice: Notice,
}

/// One row of a notification list: colored kind glyph, title, time and
/// description.
#[component]
pub fn NoticeItem(props: NoticeItemProps) -> Element {
    let color = props.notice.kind.color();
    let glyph = props.notice.kind.glyph();
    let text_title = slate::TEXT_200;
    let text_muted = slate::TEXT_400;
    let text_faint = slate::TEXT_500;

    rsx! {
        div {
            style: "display: flex; align-items: flex-start; gap: 12px;",
            div {
                style: "margin-top: 2px; width: 20px; height: 20px; border-radius: 9999px; border: 1px solid {color}4d; background: {color}1a; color: {color}; font-size: 11px; display: flex; align-items: center; justify-content: center; flex-shrink: 0;",
                "{glyph}"
            }
            div {
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    div {
                        style: "font-size: 13px; font-weight: 500; color: {text_title};",
                        "{props.notice.title}"
                    }
                    div {
                        style: "font-size: 11px; color: {text_faint};",
                        "{props.notice.time}"
                    }
                }
                div {
                    style: "font-size: 12px; color: {text_muted};",
                    "{props.notice.description}"
                }
            }
        }
    }
}
