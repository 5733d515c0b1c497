//! View rendering for the source manager component.
//!
//! Two regions: the "add source" card (form plus validation panel) and the
//! source list. Both are laid out from the view models in `view_model.rs`; no
//! decision about what to show is taken here.

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::view_model::{
    form_view, source_list_view, validation_panel_view, FormView, ListContent, PanelBody,
    SampleView, SourceCardView, SourceListView, ValidationPanelView, Verdict,
};
use super::SourceManagerComponent;

pub fn view(component: &SourceManagerComponent, ctx: &Context<SourceManagerComponent>) -> Html {
    let link = ctx.link();
    let session = component.controller.session();
    let form = form_view(&session);
    let panel = validation_panel_view(&session.panel);
    let list = source_list_view(&session);
    let count = session.sources().len();
    drop(session);

    html! {
        <div class="container">
            <header class="header">
                <h1>{"📡 Gerenciador de Fontes"}</h1>
                <p>{"Valide e cadastre fontes de notícias (RSS ou HTML)"}</p>
            </header>
            <section class="card">
                <h2>{"➕ Adicionar Nova Fonte"}</h2>
                { build_form(&form, link) }
                { build_validation_panel(panel) }
            </section>
            <section class="card">
                <div class="sources-header">
                    <h2>{ format!("📚 Fontes Cadastradas ({})", count) }</h2>
                    <button class="btn btn-secondary" onclick={link.callback(|_| Msg::Reload)}>
                        {"🔄 Atualizar"}
                    </button>
                </div>
                { build_source_list(list, link) }
            </section>
        </div>
    }
}

fn build_form(form: &FormView, link: &Scope<SourceManagerComponent>) -> Html {
    html! {
        <div class="add-source-form">
            <div class="form-group">
                <label for="sourceUrl">{"URL do site ou feed *"}</label>
                <input
                    id="sourceUrl"
                    type="url"
                    placeholder="https://exemplo.com"
                    value={form.url.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::UrlChanged(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </div>
            <div class="form-group">
                <label for="sourceName">{"Nome (opcional)"}</label>
                <input
                    id="sourceName"
                    type="text"
                    placeholder="Detectado automaticamente"
                    value={form.name.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::NameChanged(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </div>
            <div class="form-actions">
                <button
                    class="btn btn-primary"
                    disabled={form.validate.disabled}
                    onclick={link.callback(|_| Msg::Validate)}
                >
                    { form.validate.label }
                </button>
                <button
                    class="btn btn-success"
                    disabled={form.add.disabled}
                    onclick={link.callback(|_| Msg::Add)}
                >
                    { form.add.label }
                </button>
            </div>
        </div>
    }
}

fn build_validation_panel(panel: Option<ValidationPanelView>) -> Html {
    let Some(panel) = panel else {
        return html! {};
    };

    let content = match panel.body {
        PanelBody::Failure { message } => html! {
            <>
                <strong>{"❌ Erro na Validação"}</strong>
                <p>{ message }</p>
            </>
        },
        PanelBody::Report {
            score_label,
            score_class,
            verdict,
            samples,
        } => html! {
            <>
                <div class="validation-score">
                    <strong>{"Score de Validação: "}</strong>
                    <span class={classes!("score-badge", score_class)}>{ score_label }</span>
                </div>
                { build_verdict(verdict) }
                { build_samples(samples) }
            </>
        },
    };

    html! {
        <div class={panel.tone.class()}>
            { content }
        </div>
    }
}

fn build_verdict(verdict: Verdict) -> Html {
    match verdict {
        Verdict::FeedFound { url, name } => html! {
            <div class="validation-verdict">
                <strong>{"✅ RSS Feed Encontrado!"}</strong><br />
                <small>{ format!("URL: {}", url) }</small><br />
                <small>{ format!("Nome: {}", name) }</small>
            </div>
        },
        Verdict::HtmlFallback => html! {
            <div class="validation-verdict">
                <strong>{"⚠️ RSS não encontrado, mas HTML scraping funciona"}</strong><br />
                <small>{"O sistema consegue extrair notícias do HTML da página"}</small>
            </div>
        },
        Verdict::Unusable => html! {
            <div class="validation-verdict">
                <strong>{"❌ Não foi possível extrair notícias"}</strong><br />
                <small>{"Tente outra URL ou verifique se o site tem RSS feed"}</small>
            </div>
        },
    }
}

fn build_samples(samples: Vec<SampleView>) -> Html {
    if samples.is_empty() {
        return html! {};
    }
    let heading = format!("📰 Notícias Encontradas ({} exemplos):", samples.len());
    html! {
        <div class="sample-news">
            <strong>{ heading }</strong>
            { for samples.into_iter().map(build_sample) }
        </div>
    }
}

fn build_sample(sample: SampleView) -> Html {
    let title = match sample.link {
        Some(link) => html! {
            <a href={link} target="_blank" rel="noopener noreferrer">{ sample.title }</a>
        },
        None => html! { <>{ sample.title }</> },
    };
    html! {
        <div class="news-item">
            <h4>{ title }</h4>
            <p>{ sample.summary }</p>
            <small>{ sample.date }</small>
        </div>
    }
}

fn build_source_list(list: SourceListView, link: &Scope<SourceManagerComponent>) -> Html {
    let spinner = if list.loading {
        html! { <div class="loading-spinner"><div class="spinner"></div></div> }
    } else {
        html! {}
    };

    let content = match list.content {
        ListContent::Nothing => html! {},
        ListContent::Empty => html! {
            <div class="empty-state">
                <h3>{"📭 Nenhuma fonte cadastrada"}</h3>
                <p>{"Adicione sua primeira fonte usando o formulário acima"}</p>
            </div>
        },
        ListContent::Error { message } => html! {
            <div class="empty-state">
                <h3>{"❌ Erro ao carregar fontes"}</h3>
                if let Some(message) = message {
                    <p>{ message }</p>
                }
            </div>
        },
        ListContent::Cards(cards) => html! {
            <div class="sources-grid">
                { for cards.into_iter().map(|card| build_source_card(card, link)) }
            </div>
        },
    };

    html! {
        <div class="sources-container">
            { spinner }
            { content }
        </div>
    }
}

fn build_source_card(card: SourceCardView, link: &Scope<SourceManagerComponent>) -> Html {
    let id = card.id;
    let delete_name = card.delete_name;
    html! {
        <div class={card.class} key={id.to_string()}>
            <div class="source-header">
                <div class="source-info">
                    <h3>{ card.name }</h3>
                    <a href={card.url.clone()} target="_blank" rel="noopener noreferrer" class="source-url">
                        { card.url }
                    </a>
                </div>
            </div>
            <div class="source-badges">
                { for card.badges.into_iter().map(|badge| html! {
                    <span class={badge.class}>{ badge.label }</span>
                }) }
            </div>
            <div class="source-meta">
                <span>{ format!("📅 Criado: {}", card.created) }</span>
                if let Some(validated) = card.validated {
                    <span>{ format!("✅ Validado: {}", validated) }</span>
                }
            </div>
            <div class="source-actions">
                <button class={card.toggle.class} onclick={link.callback(move |_| Msg::Toggle(id))}>
                    { card.toggle.label }
                </button>
                <button
                    class="btn btn-small btn-danger"
                    onclick={link.callback(move |_| Msg::Delete { id, name: delete_name.clone() })}
                >
                    {"🗑️ Deletar"}
                </button>
            </div>
        </div>
    }
}
