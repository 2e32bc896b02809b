//! Interactive terminal front end for the blog client.
//!
//! Renders the post list and drives `BlogApp` from stdin. All behavioral
//! logic lives in `blog-core`; this binary only collects input, executes
//! HTTP round-trips through ureq, and supplies the blocking yes/no gate
//! that guards deletes.

use std::io::{self, BufRead, Write};

use blog_core::{
    BlogApp, DeleteGate, DeleteOutcome, HttpMethod, HttpRequest, HttpResponse, Transport,
    TransportError,
};
use uuid::Uuid;

/// Blocking ureq executor behind the async transport seam.
///
/// Non-2xx statuses come back as data; the core interprets them.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&req.path).send_empty(),
        };

        let mut response = result.map_err(|e| TransportError::new(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

/// Yes/no prompt on stdin. Anything but an explicit yes declines.
struct StdinGate;

impl DeleteGate for StdinGate {
    fn confirm(&self, _id: Uuid) -> bool {
        match prompt("Are you sure you want to delete this blog? [y/N]") {
            Ok(answer) => matches!(answer.trim(), "y" | "Y" | "yes"),
            Err(_) => false,
        }
    }
}

/// Read one line of input after a label. Only the trailing newline is
/// stripped; field validation is emptiness-only and happens in the core.
fn prompt(label: &str) -> io::Result<String> {
    print!("{label} ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn render(app: &BlogApp<UreqTransport>) {
    println!("\nBlog Posts");
    println!("----------");
    if app.posts().is_empty() {
        println!("No blogs available.");
    }
    for (index, post) in app.posts().iter().enumerate() {
        println!("[{index}] {}", post.title);
        println!("    {}", post.content);
        println!(
            "    By {} | {}",
            post.author,
            post.created_at.format("%Y-%m-%d %H:%M")
        );
    }
    println!("\ncommands: a(dd), e(dit) <n>, d(elete) <n>, r(efresh), q(uit)");
}

fn post_id_at(app: &BlogApp<UreqTransport>, arg: Option<&str>) -> Option<Uuid> {
    let index: usize = arg?.parse().ok()?;
    app.posts().get(index).map(|post| post.id)
}

fn fill_form(app: &mut BlogApp<UreqTransport>, keep_blank: bool) -> io::Result<()> {
    // on edit, a blank line keeps the current value
    let title = prompt("Title:")?;
    if !(keep_blank && title.is_empty()) {
        app.form_mut().set_title(title);
    }
    let content = prompt("Content:")?;
    if !(keep_blank && content.is_empty()) {
        app.form_mut().set_content(content);
    }
    let author = prompt("Author:")?;
    if !(keep_blank && author.is_empty()) {
        app.form_mut().set_author(author);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let base_url =
        std::env::var("BLOG_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut app = BlogApp::new(&base_url, UreqTransport::new());
    if rt.block_on(app.refresh()).is_err() {
        println!("Refresh failed; showing the last known list.");
    }

    loop {
        render(&app);
        let line = prompt(">")?;
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("a"), _) => {
                app.open_create();
                fill_form(&mut app, false)?;
                if !rt.block_on(app.submit()) {
                    println!("All of title, content and author are required.");
                    app.cancel();
                }
            }
            (Some("e"), arg) => match post_id_at(&app, arg) {
                Some(id) => {
                    app.open_edit(id);
                    fill_form(&mut app, true)?;
                    if !rt.block_on(app.submit()) {
                        println!("All of title, content and author are required.");
                        app.cancel();
                    }
                }
                None => println!("usage: e <post number>"),
            },
            (Some("d"), arg) => match post_id_at(&app, arg) {
                Some(id) => match rt.block_on(app.delete(id, &StdinGate)) {
                    Ok(DeleteOutcome::Deleted) => println!("Deleted."),
                    Ok(DeleteOutcome::Declined) => println!("Kept."),
                    Err(err) => println!("Delete failed: {err}"),
                },
                None => println!("usage: d <post number>"),
            },
            (Some("r"), _) => {
                if rt.block_on(app.refresh()).is_err() {
                    println!("Refresh failed; showing the last known list.");
                }
            }
            (Some("q"), _) => break,
            (None, _) => {}
            _ => println!("unknown command"),
        }
    }

    Ok(())
}
