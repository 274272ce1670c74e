//! Server-rendered HTML pages
//!
//! Plain string rendering. All user-supplied text goes through [`escape`].

use axum::response::Html;

use crate::models::{Flash, Post};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn layout(title: &str, flash: Option<&Flash>, body: &str) -> Html<String> {
    let banner = flash
        .map(|f| {
            format!(
                "<div class=\"alert alert-{}\">{}</div>\n",
                f.category,
                escape(&f.message)
            )
        })
        .unwrap_or_default();

    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title} - blogctl</title></head>\n\
         <body>\n\
         <nav><a href=\"/\">blogctl</a> | <a href=\"/create\">New Post</a></nav>\n\
         <main>\n{banner}{body}</main>\n\
         </body>\n\
         </html>\n",
        title = escape(title),
        banner = banner,
        body = body,
    ))
}

/// `GET /` - every post, newest first
pub fn list_page(posts: &[Post], flash: Option<&Flash>) -> Html<String> {
    let mut body = String::from("<h1>Welcome to the blog</h1>\n");
    for post in posts {
        body.push_str(&format!(
            "<article>\n\
             <h2><a href=\"/{id}\">{title}</a></h2>\n\
             <span class=\"created\">{created}</span>\n\
             <a href=\"/{id}/edit\">Edit</a>\n\
             </article>\n",
            id = post.id,
            title = escape(&post.title),
            created = post.created.format(TIMESTAMP_FORMAT),
        ));
    }
    layout("Posts", flash, &body)
}

/// `GET /{id}` - a single post
pub fn post_page(post: &Post) -> Html<String> {
    let body = format!(
        "<h1>{title}</h1>\n\
         <span class=\"created\">{created}</span>\n\
         <p>{content}</p>\n",
        title = escape(&post.title),
        created = post.created.format(TIMESTAMP_FORMAT),
        content = escape(&post.content),
    );
    layout(&post.title, None, &body)
}

fn post_form(action: &str, title: &str, content: &str, submit: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <label for=\"title\">Title</label>\n\
         <input type=\"text\" name=\"title\" id=\"title\" value=\"{title}\">\n\
         <label for=\"content\">Content</label>\n\
         <textarea name=\"content\" id=\"content\">{content}</textarea>\n\
         <button type=\"submit\">{submit}</button>\n\
         </form>\n",
        action = action,
        title = escape(title),
        content = escape(content),
        submit = submit,
    )
}

/// `GET /create` - empty creation form
pub fn create_page(flash: Option<&Flash>) -> Html<String> {
    let body = format!(
        "<h1>Create a New Post</h1>\n{}",
        post_form("/create", "", "", "Submit")
    );
    layout("Create a New Post", flash, &body)
}

/// `GET /{id}/edit` - form pre-filled with the stored post
pub fn edit_page(post: &Post, flash: Option<&Flash>) -> Html<String> {
    let body = format!(
        "<h1>Edit \"{title}\"</h1>\n\
         {form}\
         <hr>\n\
         <form method=\"post\" action=\"/{id}/delete\">\n\
         <button type=\"submit\" onclick=\"return confirm('Are you sure you want to delete this post?')\">Delete Post</button>\n\
         </form>\n",
        title = escape(&post.title),
        form = post_form(&format!("/{}/edit", post.id), &post.title, &post.content, "Submit"),
        id = post.id,
    );
    layout(&format!("Edit \"{}\"", post.title), flash, &body)
}

/// Terminal error page (404, 500)
pub fn error_page(heading: &str, message: &str) -> Html<String> {
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n",
        escape(heading),
        escape(message)
    );
    layout(heading, None, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_post() -> Post {
        Post {
            id: 3,
            title: "<Foo & Bar>".into(),
            content: "say \"hi\"".into(),
            created: NaiveDate::from_ymd_opt(2024, 1, 2)
                .unwrap()
                .and_hms_opt(3, 4, 5)
                .unwrap(),
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("<a href='x'>&</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&lt;/a&gt;");
    }

    #[test]
    fn list_page_links_posts_and_shows_flash() {
        let flash = Flash::success("Post created successfully!");
        let Html(html) = list_page(&[sample_post()], Some(&flash));

        assert!(html.contains("<a href=\"/3\">&lt;Foo &amp; Bar&gt;</a>"));
        assert!(html.contains("2024-01-02 03:04:05"));
        assert!(html.contains("class=\"alert alert-success\">Post created successfully!"));
    }

    #[test]
    fn edit_page_prefills_fields() {
        let Html(html) = edit_page(&sample_post(), None);

        assert!(html.contains("value=\"&lt;Foo &amp; Bar&gt;\""));
        assert!(html.contains(">say &quot;hi&quot;</textarea>"));
        assert!(html.contains("action=\"/3/delete\""));
    }

    #[test]
    fn create_page_is_empty() {
        let Html(html) = create_page(None);
        assert!(html.contains("value=\"\""));
        assert!(!html.contains("alert"));
    }
}
