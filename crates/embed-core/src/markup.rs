//! Shared HTML helpers for embed rendering
//!
//! Every value interpolated into markup goes through [`escape_attr`]. Video
//! embeds share [`video_code`], which renders a click-to-play preview that the
//! forum front end swaps for the real player.

/// Height-to-width percentage used when the width is unusable (16:9)
pub const DEFAULT_RATIO_PERCENT: f64 = 56.25;

const PLAY_ICON: &str = concat!(
    r#"<svg class="embedVideo-playIcon" xmlns="http://www.w3.org/2000/svg" viewBox="-1 -1 24 24">"#,
    "<title>Play Video</title>",
    r#"<path class="embedVideo-playIconPath embedVideo-playIconPath-circle" style="fill: currentColor; stroke-width: .3;" d="M11,0A11,11,0,1,0,22,11,11,11,0,0,0,11,0Zm0,20.308A9.308,9.308,0,1,1,20.308,11,9.308,9.308,0,0,1,11,20.308Z"></path>"#,
    r#"<polygon class="embedVideo-playIconPath embedVideo-playIconPath-triangle" style="fill: currentColor; stroke-width: .3;" points="8.609 6.696 8.609 15.304 16.261 11 8.609 6.696"></polygon>"#,
    "</svg>"
);

/// Escape a value for use inside a double- or single-quoted HTML attribute
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Height as a percentage of width, formatted for a `padding-top` style
pub fn height_ratio(width: u32, height: u32) -> String {
    let ratio = if width == 0 {
        DEFAULT_RATIO_PERCENT
    } else {
        f64::from(height) / f64::from(width) * 100.0
    };

    let formatted = format!("{:.4}", ratio);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Render a click-to-play video preview
///
/// `embed_url` is the player URL loaded on click, `photo_url` the preview
/// image shown until then.
pub fn video_code(embed_url: &str, name: &str, photo_url: &str, width: u32, height: u32) -> String {
    let attr_embed_url = escape_attr(embed_url);
    let attr_name = escape_attr(name);
    let attr_photo_url = escape_attr(photo_url);
    let ratio = height_ratio(width, height);

    format!(
        concat!(
            r#"<div class="embedVideo-ratio" style="padding-top: {ratio}%;">"#,
            r#"<button type="button" data-url="{url}" aria-label="{name}" class="embedVideo-playButton iconButton js-playVideo" style="background-image: url({photo});" title="{name}">"#,
            "{icon}",
            "</button>",
            "</div>"
        ),
        ratio = ratio,
        url = attr_embed_url,
        name = attr_name,
        photo = attr_photo_url,
        icon = PLAY_ICON,
    )
}

/// Render an iframe player
pub fn iframe_code(src: &str, width: u32, height: u32) -> String {
    format!(
        r#"<iframe width="{}" height="{}" src="{}" frameborder="0" allowfullscreen></iframe>"#,
        escape_attr(&width.to_string()),
        escape_attr(&height.to_string()),
        escape_attr(src),
    )
}

/// Render a plain link, used when a URL cannot be embedded
pub fn link_code(url: &str) -> String {
    let attr_url = escape_attr(url);
    format!(
        r#"<a href="{}" rel="nofollow noopener">{}</a>"#,
        attr_url, attr_url
    )
}
