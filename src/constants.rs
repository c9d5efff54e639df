use once_cell::sync::Lazy;
use regex::Regex;

/// Any character other than `(` or the very start of the text.
/// A URL right after `(` is the target of a `[text](url)` link and is left alone.
const GUARD: &str = r#"(?:[^(]|^)"#;

/// Default `(width, height)` per provider, in `Provider::ALL` order.
/// An empty value lets the provider pick its own size.
pub const DEFAULT_DIMENSIONS: [(&str, &str); 8] = [
    ("480", "300"),
    ("480", "405"),
    ("480", "392"),
    ("498", "423"),
    ("410", "341"),
    ("850", "480"),
    ("512", "322"),
    ("", ""),
];

pub const FLASH_MIME_TYPE: &str = "application/x-shockwave-flash";
pub const RESPONSIVE_CLASS: &str = "embed-responsive";
pub const RESPONSIVE_ITEM_CLASS: &str = "embed-responsive-item";

pub const BLIPTV_PLAYER: &str = "//blip.tv/scripts/flash/showplayer.swf?file=http://blip.tv/file/get/";
pub const DAILYMOTION_PLAYER: &str = "//www.dailymotion.com/swf/";
pub const GAMETRAILERS_PLAYER: &str = "//www.gametrailers.com/remote_wrap.php?mid=";
pub const METACAFE_PLAYER: &str = "//www.metacafe.com/fplayer/";
pub const VEOH_PLAYER: &str = "//www.veoh.com/videodetails2.swf?permalinkId=";
pub const VIMEO_PLAYER: &str = "//vimeo.com/moogaloop.swf?clip_id=";
pub const YAHOO_PLAYER: &str = "//d.yimg.com/static.video.yahoo.com/yep/YV_YEP.swf?ver=2.2.40";
pub const YOUTUBE_PLAYER: &str = "//www.youtube.com/embed/";

fn guarded(body: &str) -> String {
    format!("{GUARD}(?P<url>{body})")
}

pub static BLIPTV: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&guarded(
        r#"http://(?:[A-Za-z0-9_]+\.)?blip\.tv/file/get/(?P<file>\S+\.flv)"#,
    ))
    .expect("BLIPTV regex")
});
pub static DAILYMOTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&guarded(r#"http://www\.dailymotion\.com/(?P<path>\S+)"#))
        .expect("DAILYMOTION regex")
});
pub static GAMETRAILERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&guarded(
        r#"http://www\.gametrailers\.com/video/[a-z0-9-]+/(?P<id>[0-9]+)"#,
    ))
    .expect("GAMETRAILERS regex")
});
pub static METACAFE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&guarded(r#"http://www\.metacafe\.com/watch/(?P<id>[^\s/]+)/(?:\S*/)?"#))
        .expect("METACAFE regex")
});
pub static VEOH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&guarded(
        r#"http://www\.veoh\.com/\S*(?:#watch%3D|watch/)(?P<id>[A-Za-z0-9_]+)"#,
    ))
    .expect("VEOH regex")
});
pub static VIMEO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&guarded(r#"https?://(?:www\.)?vimeo\.com/(?P<id>[0-9]+)\S*"#))
        .expect("VIMEO regex")
});
pub static YAHOO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&guarded(
        r#"https?://video\.yahoo\.com/watch/(?P<vid>[0-9]+)/(?P<id>[0-9]+)"#,
    ))
    .expect("YAHOO regex")
});
pub static YOUTUBE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&guarded(
        r#"https?://(?:www\.youtube\.com/watch\?\S*v=|youtu\.be/)(?P<args>[A-Za-z0-9_&=-]+)\S*"#,
    ))
    .expect("YOUTUBE regex")
});

// host side constructs, see `inline`
pub static INLINE_CONSTRUCT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?P<code>`[^`]*`)|\\(?P<escaped>\S+)|(?P<link>\[[^\]]*\]\([^)\s]*\))|(?P<autolink><https?://[^>\s]+>)"#,
    )
    .expect("INLINE_CONSTRUCT regex")
});
