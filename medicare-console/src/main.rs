use std::sync::Arc;

use medicare_client::{
    ClipboardGateway, DocumentUpload, HttpBackend, Language, Orchestrator, Role, SectionKey,
    SessionState, SessionStore, ToastKind, ToastNotifier, View, resolve,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const DEFAULT_API_URL: &str = "https://medicare-ai-5.onrender.com";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let api_url = std::env::var("MEDICARE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    info!("Medicare console starting against {}", api_url);

    let store = Arc::new(SessionStore::new());
    let toasts = Arc::new(ToastNotifier::new(store.clone()));
    let backend = Arc::new(HttpBackend::new(api_url));
    let orchestrator = Orchestrator::new(store.clone(), backend, toasts.clone());
    let clipboard = ClipboardGateway::system(store.clone(), toasts);

    render(&store.snapshot());
    print_help(&store.snapshot());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.split_once(' ').unwrap_or((line, "")) {
            (":quit" | ":q", _) => break,
            (":help", _) => print_help(&store.snapshot()),
            (":lang", tag) => switch_language(&store, tag),
            (":view", name) => switch_view(&store, name),
            (":toggle", name) => toggle_section(&store, name),
            (":copy", _) => copy_extracted_text(&store, &clipboard),
            (":search", query) => {
                store.set_view(View::Research);
                orchestrator.search(query).await;
            }
            (":analyze", path) => {
                store.set_view(View::Analysis);
                analyze_file(&store, &orchestrator, path).await;
            }
            _ => {
                store.set_view(View::Chat);
                orchestrator.send_chat_message(line).await;
            }
        }

        render(&store.snapshot());
    }

    Ok(())
}

fn print_help(state: &SessionState) {
    let t = resolve(state.language);
    println!("Commands:");
    println!("  <text>             {}", t.chat_placeholder);
    println!("  :search <query>    {}", t.search_placeholder);
    println!("  :analyze <path>    {}", t.upload_text);
    println!("  :view <welcome|chat|analysis|research>");
    println!("  :toggle <summary|findings|recommendations|next>");
    println!("  :lang [en|fr], :copy, :help, :quit");
}

fn switch_language(store: &SessionStore, tag: &str) {
    let language = if tag.is_empty() {
        store.language().toggled()
    } else {
        // Unsupported tags fall back to English rather than surfacing an error.
        Language::parse(tag).unwrap_or_else(|e| {
            warn!("{}", e);
            Language::En
        })
    };
    store.set_language(language);
}

fn switch_view(store: &SessionStore, name: &str) {
    match name {
        "welcome" => store.set_view(View::Welcome),
        "chat" => store.set_view(View::Chat),
        "analysis" => store.set_view(View::Analysis),
        "research" => store.set_view(View::Research),
        other => println!("Unknown view: {}", other),
    }
}

fn toggle_section(store: &SessionStore, name: &str) {
    let section = match name {
        "summary" => SectionKey::Summary,
        "findings" => SectionKey::KeyFindings,
        "recommendations" => SectionKey::Recommendations,
        "next" => SectionKey::NextSteps,
        other => {
            println!("Unknown section: {}", other);
            return;
        }
    };
    store.toggle_section(section);
}

fn copy_extracted_text(store: &SessionStore, clipboard: &ClipboardGateway) {
    match store.snapshot().extracted_text {
        Some(text) if !text.is_empty() => clipboard.copy(&text),
        _ => println!("Nothing to copy yet."),
    }
}

async fn analyze_file(store: &SessionStore, orchestrator: &Orchestrator, path: &str) {
    let path = path.trim();
    if path.is_empty() {
        println!("Usage: :analyze <path>");
        return;
    }
    match tokio::fs::read(path).await {
        Ok(bytes) => {
            let file_name = path.rsplit('/').next().unwrap_or(path).to_string();
            let content_type = content_type_for(&file_name).to_string();
            orchestrator
                .analyze_document(DocumentUpload {
                    file_name,
                    content_type,
                    bytes,
                })
                .await;
        }
        Err(e) => println!("Could not read {}: {}", path, e),
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    match file_name.rsplit('.').next() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}

fn render(state: &SessionState) {
    let t = resolve(state.language);

    println!();
    println!("== {} — {} ==", t.app_name, t.tagline);
    println!("{}", t.disclaimer);
    if state.busy {
        println!("[{}]", t.loading);
    }

    match state.view {
        View::Welcome => render_welcome(state),
        View::Chat => render_chat(state),
        View::Analysis => render_analysis(state),
        View::Research => render_research(state),
    }

    if state.toast.visible {
        let marker = match state.toast.kind {
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
        };
        println!("[{} {}]", marker, state.toast.message);
    }
}

fn render_welcome(state: &SessionState) {
    let t = resolve(state.language);
    println!("{}", t.features_title);
    println!("  {} — {}", t.feature_chat, t.feature_chat_desc);
    println!("  {} — {}", t.feature_analysis, t.feature_analysis_desc);
    println!("  {} — {}", t.feature_research, t.feature_research_desc);
    println!("{} →", t.get_started);
}

fn render_chat(state: &SessionState) {
    let t = resolve(state.language);
    for message in &state.messages {
        let who = match message.role {
            Role::User => "You",
            Role::Assistant => "AI",
        };
        println!("{}: {}", who, message.content);
    }
    if state.messages.is_empty() {
        for question in t.suggested_questions {
            println!("  ? {}", question);
        }
    }
}

fn render_analysis(state: &SessionState) {
    let t = resolve(state.language);
    if let Some(text) = &state.extracted_text {
        println!("-- {} --", t.extracted_text);
        println!("{}", text);
    }
    let Some(analysis) = &state.analysis else {
        return;
    };
    println!("-- {} --", t.analysis_results);
    for section in SectionKey::ALL {
        let expanded = state.sections.is_expanded(section);
        let arrow = if expanded { "▾" } else { "▸" };
        println!("{} {}", arrow, t.section_title(section));
        if !expanded {
            continue;
        }
        match section {
            SectionKey::Summary => println!("  {}", analysis.summary),
            SectionKey::KeyFindings => {
                for item in &analysis.key_findings {
                    println!("  • {}", item);
                }
            }
            SectionKey::Recommendations => {
                for item in &analysis.recommendations {
                    println!("  • {}", item);
                }
            }
            SectionKey::NextSteps => {
                for item in &analysis.next_steps {
                    println!("  • {}", item);
                }
            }
        }
    }
}

fn render_research(state: &SessionState) {
    let t = resolve(state.language);
    if state.search_results.is_empty() {
        for topic in t.research_topics {
            println!("  ? {}", topic);
        }
        return;
    }
    if let Some(summary) = state
        .search_results
        .first()
        .and_then(|r| r.ai_summary.as_ref())
    {
        println!("-- {} --", t.ai_summary);
        println!("{}", summary);
    }
    for result in &state.search_results {
        let source = result.source.as_deref().unwrap_or("Medical Source");
        println!("* {} [{}]", result.title, source);
        println!("  {}", result.description);
        println!("  {}", result.url);
    }
}
