use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::data::blog::{posts, BlogPost, CATEGORIES};
use crate::scroll::listen_escape;
use crate::selection::use_selection;
use crate::Route;

#[derive(Properties, PartialEq)]
struct PostPanelProps {
    post: BlogPost,
    on_close: Callback<()>,
}

#[function_component(PostPanel)]
fn post_panel(props: &PostPanelProps) -> Html {
    let post = &props.post;
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <article class="post-panel" tabindex="-1">
            <button class="panel-close" onclick={close} aria-label="Close post">{"✕"}</button>
            <span class="tag">{post.category}</span>
            <h2>{post.title}</h2>
            <p class="post-meta">
                {format!("{} · {} · {}", post.author, post.date, post.read_time)}
            </p>
            <p class="post-body">{post.content}</p>
            <div class="post-tags">
                { for post.tags.iter().map(|t| html! { <span class="tag">{*t}</span> }) }
            </div>
        </article>
    }
}

#[function_component(Blog)]
pub fn blog_page() -> Html {
    let catalog = use_memo(|_| posts(), ());
    let selection = use_selection(
        Rc::clone(&catalog),
        "/blog",
        |id| Route::BlogPost { id },
        Route::Blog,
    );

    let query = use_state(String::new);
    let category = use_state(|| "All".to_string());

    let panel_open = selection.current().is_some();
    {
        let on_close = selection.on_close.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let teardown = open.then(|| listen_escape(move || on_close.emit(())));
                move || {
                    if let Some(teardown) = teardown {
                        teardown();
                    }
                }
            },
            panel_open,
        );
    }

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    // The first featured post headlines the page; the rest are filterable.
    let featured = catalog
        .iter()
        .find(|p| p.featured)
        .or_else(|| catalog.iter().next())
        .cloned();
    let category_filter = if *category == "All" { "" } else { category.as_str() };
    let filtered: Vec<BlogPost> = catalog
        .filter(&query, category_filter)
        .into_iter()
        .filter(|p| featured.as_ref().map(|f| f.id != p.id).unwrap_or(true))
        .cloned()
        .collect();

    html! {
        <div class="page page-blog">
            <section class="page-hero">
                <div class="section-inner">
                    <span class="hero-tag">{"SAGITTARIUS BLOG"}</span>
                    <h1>
                        {"Insights & Updates from"}
                        <br />
                        <span class="gradient-text">{"Scientific Web Development"}</span>
                    </h1>
                </div>
            </section>

            {
                match (&featured, selection.current()) {
                    (_, Some(post)) => html! {
                        <section class="section-inner">
                            <PostPanel post={post.clone()} on_close={selection.on_close.clone()} />
                        </section>
                    },
                    (Some(featured), None) => {
                        let open = {
                            let on_open = selection.on_open.clone();
                            let id = featured.id;
                            Callback::from(move |_| on_open.emit(id.to_string()))
                        };
                        html! {
                            <section class="section-inner">
                                <div class="featured-post" onclick={open} role="button" tabindex="0">
                                    <span class="tag">{featured.category}</span>
                                    <h2>{featured.title}</h2>
                                    <p>{featured.excerpt}</p>
                                    <p class="post-meta">
                                        {format!("{} · {} · {}", featured.author, featured.date, featured.read_time)}
                                    </p>
                                </div>
                            </section>
                        }
                    }
                    (None, None) => html! {},
                }
            }

            <section class="blog-list">
                <div class="section-inner">
                    <div class="blog-controls">
                        <label class="sr-only" for="blog-search">{"Search posts"}</label>
                        <input
                            id="blog-search"
                            type="search"
                            placeholder="Search posts..."
                            value={(*query).clone()}
                            {oninput}
                        />
                        <div class="category-chips">
                            { for CATEGORIES.iter().map(|name| {
                                let select = {
                                    let category = category.clone();
                                    let name = *name;
                                    Callback::from(move |_| category.set(name.to_string()))
                                };
                                html! {
                                    <button
                                        class={classes!("chip", (*category == *name).then_some("active"))}
                                        onclick={select}
                                        aria-pressed={(*category == *name).to_string()}
                                    >
                                        {*name}
                                    </button>
                                }
                            }) }
                        </div>
                    </div>

                    {
                        if filtered.is_empty() {
                            html! { <p class="blog-empty">{"No posts match that search."}</p> }
                        } else {
                            html! {
                                <div class="post-grid">
                                    { for filtered.iter().map(|post| {
                                        let open = {
                                            let on_open = selection.on_open.clone();
                                            let id = post.id;
                                            Callback::from(move |_| on_open.emit(id.to_string()))
                                        };
                                        html! {
                                            <div class="post-card" onclick={open} role="button" tabindex="0">
                                                <span class="tag">{post.category}</span>
                                                <h3>{post.title}</h3>
                                                <p>{post.excerpt}</p>
                                                <p class="post-meta">
                                                    {format!("{} · {}", post.date, post.read_time)}
                                                </p>
                                            </div>
                                        }
                                    }) }
                                </div>
                            }
                        }
                    }
                </div>
            </section>
        </div>
    }
}
