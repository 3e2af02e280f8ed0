//! View rendering for the hotel form.

use super::messages::Msg;
use super::state::HotelForm;
use crate::route::Route;
use common::model::picture::Picture;
use common::validation::{attribute_name, HOTEL_FIELDS};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

pub fn view(component: &HotelForm, ctx: &Context<HotelForm>) -> Html {
    let link = ctx.link();
    if component.loading {
        return html! { <p class="loading">{"Loading..."}</p> };
    }

    let (title, cancel_href) = match component.hotel_id {
        Some(id) => ("Edit hotel", Route::Detail(id).href()),
        None => ("New hotel", Route::List { page: 1 }.href()),
    };

    html! {
        <div class="hotel-form">
            <div class="toolbar">
                <h1>{ title }</h1>
                if component.is_dirty() {
                    <span class="dirty" title="Unsaved changes">{"●"}</span>
                }
            </div>
            if !component.errors.is_empty() {
                <ul class="errors">
                    { for component.errors.iter().map(|e| html! { <li>{ e.clone() }</li> }) }
                </ul>
            }
            <form onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                { for HOTEL_FIELDS.iter().map(|field| build_field(component, link, *field)) }
                if component.hotel_id.is_none() {
                    { build_file_picker(component, link) }
                }
                <div class="actions">
                    <button class="btn" type="submit" disabled={component.submitting}>
                        { if component.submitting { "Saving..." } else { "Save" } }
                    </button>
                    <a href={cancel_href}>{"Cancel"}</a>
                </div>
            </form>
            if component.hotel_id.is_some() {
                { build_picture_list(component, link) }
            }
        </div>
    }
}

fn label(field: &str) -> String {
    let name = attribute_name(field);
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => name,
    }
}

fn build_field(component: &HotelForm, link: &Scope<HotelForm>, field: &'static str) -> Html {
    let value = component.values.get(field).cloned().unwrap_or_default();
    let input = match field {
        "description" => html! {
            <textarea id={field} rows="5" value={value}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    Msg::SetField(field, input.value())
                })} />
        },
        _ => {
            let kind = match field {
                "longitude" | "latitude" | "max_capacity" | "price_per_night" => "number",
                _ => "text",
            };
            html! {
                <input id={field} type={kind} step="any" value={value}
                    oninput={link.callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetField(field, input.value())
                    })} />
            }
        }
    };

    html! {
        <div class="field">
            <label for={field}>{ label(field) }</label>
            { input }
        </div>
    }
}

fn build_file_picker(component: &HotelForm, link: &Scope<HotelForm>) -> Html {
    html! {
        <div class="field">
            <label for="pictures">{"Pictures"}</label>
            <input id="pictures" type="file" accept="image/*" multiple={true}
                onchange={link.callback(|e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let mut files = Vec::new();
                    if let Some(list) = input.files() {
                        for i in 0..list.length() {
                            if let Some(file) = list.get(i) {
                                files.push(file);
                            }
                        }
                    }
                    Msg::FilesSelected(files)
                })} />
            if !component.files.is_empty() {
                <ol class="selected-files">
                    { for component.files.iter().map(|f| html! { <li>{ f.name() }</li> }) }
                </ol>
            }
        </div>
    }
}

fn build_picture_list(component: &HotelForm, link: &Scope<HotelForm>) -> Html {
    html! {
        <section class="pictures">
            <h2>{"Pictures"}</h2>
            if component.pictures.is_empty() {
                <p class="empty">{"No pictures"}</p>
            }
            { for component.pictures.iter().map(|p| build_picture_row(component, link, p)) }
        </section>
    }
}

fn build_picture_row(component: &HotelForm, link: &Scope<HotelForm>, picture: &Picture) -> Html {
    let id = picture.id;
    let index = component.picture_indexes.get(&id).cloned().unwrap_or_default();
    html! {
        <div class="picture-row" key={id}>
            <img src={picture.file_path.clone()} alt={format!("Picture {}", id)} />
            <label>
                {"Index "}
                <input type="number" min="0" step="1" value={index}
                    oninput={link.callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetPictureIndex(id, input.value())
                    })} />
            </label>
            <button class="btn" onclick={link.callback(move |_| Msg::SavePictureIndex(id))}>{"Save index"}</button>
            <button class="btn danger" onclick={link.callback(move |_| Msg::DeletePicture(id))}>{"Delete"}</button>
        </div>
    }
}
