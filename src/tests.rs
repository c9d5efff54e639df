use crate::*;

const METACAFE: &str = "http://www.metacafe.com/watch/yt-tZMsrrQCnx8/pycon_2008_django_sprint_room/";
const YOUTUBE: &str = "http://www.youtube.com/watch?v=u1mA-0w8XPo&hd=1&fs=1&feature=PlayList&p=34C6046F7FEACFD3&playnext=1&playnext_from=PL&index=1";

/// One canonical URL per provider, in registration order.
const CANONICAL: [(Provider, &str); 8] = [
    (Provider::BlipTv, "http://blip.tv/file/get/Pycon-PlenarySprintIntro563.flv"),
    (
        Provider::Dailymotion,
        "http://www.dailymotion.com/relevance/search/ut2004/video/x3kv65_ut2004-ownage_videogames",
    ),
    (
        Provider::Gametrailers,
        "http://www.gametrailers.com/video/console-comparison-borderlands/58079",
    ),
    (Provider::Metacafe, METACAFE),
    (Provider::Veoh, "http://www.veoh.com/search/videos/q/mario#watch%3De129555XxCZanYD"),
    (Provider::Vimeo, "http://www.vimeo.com/1496152"),
    (Provider::Yahoo, "http://video.yahoo.com/watch/1981791/4769603"),
    (Provider::Youtube, YOUTUBE),
];

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn single_embed<'s, 'a>(spans: &'s [Span<'a>]) -> &'s Embed<'a> {
    assert_eq!(spans.len(), 1, "expected a single span: {spans:?}");
    spans[0].embed().expect("span is not an embed")
}

fn plugin_xhtml(url: &str, width: &str, height: &str, extra: &str) -> String {
    format!(
        r#"<object type="application/x-shockwave-flash" width="{width}" height="{height}" data="{url}"><param name="movie" value="{url}"></param><param name="allowFullScreen" value="true"></param>{extra}</object>"#
    )
}

fn iframe_xhtml(url: &str, width: &str, height: &str) -> String {
    format!(
        r#"<div class="embed-responsive embed-responsive-16by9"><iframe width="{width}" height="{height}" src="{url}" allowfullscreen="true" frameborder="0" class="embed-responsive-item"></iframe></div>"#
    )
}

#[test]
fn metacafe() {
    init();
    let embedder = VideoEmbedder::default();
    let spans = embedder.render(METACAFE);
    let embed = single_embed(&spans);

    assert_eq!(embed.provider, Provider::Metacafe);
    assert_eq!(embed.source, METACAFE);
    assert_eq!(embed.tree.tag(), "div");

    let iframe = &embed.tree.children()[0];
    assert_eq!(iframe.tag(), "iframe");
    assert_eq!(iframe.attribute("src"), Some("//www.metacafe.com/fplayer/yt-tZMsrrQCnx8.swf"));
    assert_eq!(iframe.attribute("width"), Some("498"));
    assert_eq!(iframe.attribute("height"), Some("423"));
}

#[test]
fn metacafe_with_arguments() {
    init();
    let config = ProviderConfig::new([("metacafe_width", "500"), ("metacafe_height", "425")]).unwrap();
    let embedder = VideoEmbedder::new(config);

    assert_eq!(
        embedder.render_to_string(METACAFE),
        iframe_xhtml("//www.metacafe.com/fplayer/yt-tZMsrrQCnx8.swf", "500", "425")
    );
}

#[test]
fn metacafe_link() {
    init();
    let text = format!("[Metacafe link]({METACAFE})");
    let embedder = VideoEmbedder::default();

    assert_eq!(embedder.render(&text), vec![Span::PlainText(text.as_str())]);
    assert_eq!(embedder.process(&text), vec![Span::LinkWrapped(text.as_str())]);
}

#[test]
fn metacafe_escaped() {
    init();
    let text = format!("\\{METACAFE}");
    let embedder = VideoEmbedder::default();

    assert_eq!(embedder.process(&text), vec![Span::Escaped(METACAFE)]);
    assert_eq!(embedder.process_to_string(&text), METACAFE);
}

#[test]
fn metacafe_code() {
    init();
    let text = format!("`{METACAFE}`");
    let embedder = VideoEmbedder::default();

    assert_eq!(embedder.process(&text), vec![Span::Escaped(text.as_str())]);
}

#[test]
fn metacafe_stops_at_last_slash() {
    init();
    let embedder = VideoEmbedder::default();

    let text = format!("see {METACAFE}.");
    let spans = embedder.render(&text);
    assert_eq!(spans.len(), 3);
    assert_eq!(spans[0].text(), Some("see "));
    assert_eq!(spans[1].embed().map(|embed| embed.source), Some(METACAFE));
    assert_eq!(spans[2].text(), Some("."));

    let text = format!("{METACAFE}, nice");
    let spans = embedder.render(&text);
    assert_eq!(spans[0].embed().map(|embed| embed.source), Some(METACAFE));
    assert_eq!(spans[1], Span::PlainText(", nice"));

    let spans = embedder.render("http://www.metacafe.com/watch/123/slug");
    let embed = spans[0].embed().expect("metacafe url was not embedded");
    assert_eq!(embed.source, "http://www.metacafe.com/watch/123/");
    assert_eq!(
        embed.tree.children()[0].attribute("src"),
        Some("//www.metacafe.com/fplayer/123.swf")
    );
    assert_eq!(spans[1], Span::PlainText("slug"));
}

#[test]
fn youtube() {
    init();
    let embedder = VideoEmbedder::default();

    assert_eq!(
        embedder.render_to_string("http://www.youtube.com/watch?v=u1mA-0w8XPo&hd=1&fs=1"),
        iframe_xhtml("//www.youtube.com/embed/u1mA-0w8XPo&amp;hd=1&amp;fs=1", "", "")
    );

    let spans = embedder.render(YOUTUBE);
    let iframe = &single_embed(&spans).tree.children()[0];
    assert_eq!(
        iframe.attribute("src"),
        Some("//www.youtube.com/embed/u1mA-0w8XPo&hd=1&fs=1&feature=PlayList&p=34C6046F7FEACFD3&playnext=1&playnext_from=PL&index=1")
    );
}

#[test]
fn youtube_with_arguments() {
    init();
    let config = ProviderConfig::from_args("video(youtube_width=200,youtube_height=100)").unwrap();
    let embedder = VideoEmbedder::new(config);
    let spans = embedder.render(YOUTUBE);
    let iframe = &single_embed(&spans).tree.children()[0];

    assert_eq!(iframe.attribute("width"), Some("200"));
    assert_eq!(iframe.attribute("height"), Some("100"));
}

#[test]
fn youtube_short_link() {
    init();
    let embedder = VideoEmbedder::default();
    let spans = embedder.render("https://youtu.be/u1mA-0w8XPo");
    let embed = single_embed(&spans);

    assert_eq!(embed.provider, Provider::Youtube);
    assert_eq!(
        embed.tree.children()[0].attribute("src"),
        Some("//www.youtube.com/embed/u1mA-0w8XPo")
    );
}

#[test]
fn youtube_link() {
    init();
    let text = "[Youtube link](http://www.youtube.com/watch?v=u1mA-0w8XPo&feature=PlayList&p=34C6046F7FEACFD3&playnext=1&playnext_from=PL&index=1)";
    let spans = VideoEmbedder::default().render(text);

    assert!(!spans.iter().any(Span::is_recognized));
}

#[test]
fn dailymotion() {
    init();
    let embedder = VideoEmbedder::default();

    assert_eq!(
        embedder.render_to_string(
            "http://www.dailymotion.com/relevance/search/ut2004/video/x3kv65_ut2004-ownage_videogames"
        ),
        plugin_xhtml("//www.dailymotion.com/swf/x3kv65_ut2004-ownage_videogames", "480", "405", "")
    );
    assert_eq!(
        embedder.render_to_string("http://www.dailymotion.com/us/video/x8qak3_iron-man-vs-bruce-lee_fun"),
        plugin_xhtml("//www.dailymotion.com/swf/x8qak3_iron-man-vs-bruce-lee_fun", "480", "405", "")
    );
}

#[test]
fn dailymotion_without_id_is_left_alone() {
    init();
    let text = "see http://www.dailymotion.com/us/video/ there";

    assert_eq!(VideoEmbedder::default().render(text), vec![Span::PlainText(text)]);
}

#[test]
fn yahoo() {
    init();
    let url = "//d.yimg.com/static.video.yahoo.com/yep/YV_YEP.swf?ver=2.2.40";

    assert_eq!(
        VideoEmbedder::default().render_to_string("http://video.yahoo.com/watch/1981791/4769603"),
        plugin_xhtml(
            url,
            "512",
            "322",
            r#"<param name="flashVars" value="id=4769603&amp;vid=1981791"></param>"#
        )
    );
}

#[test]
fn veoh() {
    init();
    let embedder = VideoEmbedder::default();

    for (text, id) in [
        ("http://www.veoh.com/search/videos/q/mario#watch%3De129555XxCZanYD", "e129555XxCZanYD"),
        ("http://www.veoh.com/group/BigCatRescuers#watch%3Dv16771056hFtSBYEr", "v16771056hFtSBYEr"),
        (
            "http://www.veoh.com/browse/videos/category/anime/watch/v181645607JyXPWcQ",
            "v181645607JyXPWcQ",
        ),
    ] {
        let spans = embedder.render(text);
        let embed = single_embed(&spans);
        assert_eq!(
            embed.tree.attribute("data"),
            Some(format!("//www.veoh.com/videodetails2.swf?permalinkId={id}").as_str())
        );
        assert_eq!(embed.tree.attribute("width"), Some("410"));
        assert_eq!(embed.tree.attribute("height"), Some("341"));
    }
}

#[test]
fn vimeo() {
    init();
    let embedder = VideoEmbedder::default();
    let expected = iframe_xhtml(
        "//vimeo.com/moogaloop.swf?clip_id=1496152&amp;server=vimeo.com",
        "850",
        "480",
    );

    assert_eq!(embedder.render_to_string("http://www.vimeo.com/1496152"), expected);
    assert_eq!(embedder.render_to_string("https://vimeo.com/1496152?test=test"), expected);
}

#[test]
fn bliptv() {
    init();
    let url = "//blip.tv/scripts/flash/showplayer.swf?file=http://blip.tv/file/get/Pycon-PlenarySprintIntro563.flv";

    assert_eq!(
        VideoEmbedder::default().render_to_string("http://blip.tv/file/get/Pycon-PlenarySprintIntro563.flv"),
        plugin_xhtml(url, "480", "300", "")
    );
}

#[test]
fn gametrailers() {
    init();

    assert_eq!(
        VideoEmbedder::default()
            .render_to_string("http://www.gametrailers.com/video/console-comparison-borderlands/58079"),
        plugin_xhtml("//www.gametrailers.com/remote_wrap.php?mid=58079", "480", "392", "")
    );
}

#[test]
fn every_provider_is_recognized() {
    init();
    let embedder = VideoEmbedder::default();

    for (provider, url) in CANONICAL {
        let spans = embedder.render(url);
        let embed = single_embed(&spans);
        assert_eq!(embed.provider, provider);
        assert_eq!(embed.source, url);
    }
}

#[test]
fn link_targets_are_never_embedded() {
    init();
    let embedder = VideoEmbedder::default();

    for (provider, url) in CANONICAL {
        let text = format!("[{provider}]({url})");
        assert!(
            !embedder.render(&text).iter().any(Span::is_recognized),
            "{provider} link was embedded"
        );
        assert_eq!(embedder.render_to_string(&text), text);
    }
}

#[test]
fn surrounding_text_is_kept() {
    init();
    let text = "Look: http://vimeo.com/1496152 neat";
    let spans = VideoEmbedder::default().render(text);

    assert_eq!(spans.len(), 3);
    assert_eq!(spans[0], Span::PlainText("Look: "));
    assert_eq!(spans[1].embed().map(|embed| embed.source), Some("http://vimeo.com/1496152"));
    assert_eq!(spans[2], Span::PlainText(" neat"));
}

#[test]
fn guard_character_is_kept() {
    init();
    let spans = VideoEmbedder::default().render("éhttp://youtu.be/abc");

    assert_eq!(spans[0], Span::PlainText("é"));
    assert_eq!(spans[1].embed().map(|embed| embed.source), Some("http://youtu.be/abc"));
}

#[test]
fn scan_order_follows_text() {
    init();
    let text = "http://youtu.be/abc\nhttp://vimeo.com/1";
    let spans = VideoEmbedder::default().render(text);
    let providers: Vec<Provider> = spans
        .iter()
        .filter_map(|span| span.embed().map(|embed| embed.provider))
        .collect();

    assert_eq!(providers, vec![Provider::Youtube, Provider::Vimeo]);
    assert_eq!(spans[1], Span::PlainText("\n"));
    assert_eq!(spans.len(), 3);
}

#[test]
fn custom_matchers() {
    init();
    let embedder = VideoEmbedder::with_matchers(
        ProviderConfig::default(),
        vec![Matcher::new(Provider::Vimeo)],
    );
    let text = "http://youtu.be/abc http://vimeo.com/1";
    let spans = embedder.render(text);

    assert_eq!(spans[0], Span::PlainText("http://youtu.be/abc "));
    assert_eq!(spans[1].embed().map(|embed| embed.provider), Some(Provider::Vimeo));
}

#[test]
fn first_matcher_wins_a_tie() {
    assert_eq!(earliest([Some(7), Some(3), Some(3), None]), Some(1));
    assert_eq!(earliest([None, Some(0)]), Some(1));
    assert_eq!(earliest([None, None]), None);
}

#[test]
fn downgraded_match_does_not_stop_the_scan() {
    init();
    let embedder = VideoEmbedder::with_matchers(
        ProviderConfig::default(),
        vec![
            Matcher::new(Provider::Dailymotion),
            Matcher::new(Provider::Dailymotion),
            Matcher::new(Provider::Vimeo),
        ],
    );
    let spans = embedder.render("see http://www.dailymotion.com/us/video/ and http://vimeo.com/1");

    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0], Span::PlainText("see http://www.dailymotion.com/us/video/ and "));
    assert_eq!(spans[1].embed().map(|embed| embed.provider), Some(Provider::Vimeo));
}

#[test]
fn default_matcher_order() {
    let embedder = VideoEmbedder::default();
    assert_eq!(embedder.matchers(), Matcher::defaults().as_slice());

    let names: Vec<&str> = embedder.matchers().iter().map(Matcher::name).collect();

    assert_eq!(
        names,
        vec!["bliptv", "dailymotion", "gametrailers", "metacafe", "veoh", "vimeo", "yahoo", "youtube"]
    );
}

#[test]
fn override_changes_only_that_provider() {
    init();
    let defaults = VideoEmbedder::default();
    let embedder = VideoEmbedder::new(ProviderConfig::new([("veoh_height", "1")]).unwrap());
    assert_eq!(embedder.config().get(Provider::Veoh, Dimension::Height), "1");

    for (provider, url) in CANONICAL {
        let output = embedder.render_to_string(url);
        if provider == Provider::Veoh {
            assert!(output.contains(r#"height="1""#));
        } else {
            assert_eq!(output, defaults.render_to_string(url), "{provider}");
        }
    }
}

#[test]
fn rendering_output_again_changes_nothing() {
    init();
    let embedder = VideoEmbedder::default();

    // the Blip.tv player URL carries the raw file URL in its query
    for (provider, url) in CANONICAL.into_iter().filter(|(p, _)| *p != Provider::BlipTv) {
        let output = embedder.render_to_string(&format!("text {url} text"));
        assert!(
            !embedder.render(&output).iter().any(Span::is_recognized),
            "{provider} output was embedded again"
        );
    }
}

#[test]
fn bliptv_output_is_matched_again() {
    init();
    let (_, url) = CANONICAL[0];
    let embedder = VideoEmbedder::default();
    let output = embedder.render_to_string(url);
    let spans = embedder.render(&output);
    let sources: Vec<&str> = spans
        .iter()
        .filter_map(|span| span.embed())
        .map(|embed| embed.source)
        .collect();

    // data and movie param both end in `file=<url>`, guarded by `=`
    assert_eq!(sources, vec![url, url]);
}

#[test]
fn no_urls() {
    let embedder = VideoEmbedder::default();

    assert!(embedder.render("").is_empty());
    assert_eq!(embedder.render("nothing here"), vec![Span::PlainText("nothing here")]);
    assert_eq!(
        embedder.render("http://www.example.com/watch?v=abc"),
        vec![Span::PlainText("http://www.example.com/watch?v=abc")]
    );
}

#[test]
fn shared_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<VideoEmbedder>();

    let embedder = VideoEmbedder::default();
    let cases = CANONICAL;
    std::thread::scope(|scope| {
        let handles: Vec<_> = cases
            .iter()
            .map(|(provider, url)| {
                let embedder = &embedder;
                scope.spawn(move || {
                    let spans = embedder.render(url);
                    spans[0].embed().map(|embed| embed.provider) == Some(*provider)
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    });
}
