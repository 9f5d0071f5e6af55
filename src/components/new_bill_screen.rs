//! New Bill Screen
//!
//! Expense form with receipt upload.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::components::DashboardShell;
use crate::containers::NewBillForm;
use crate::context::use_app_context;
use crate::error::NewBillError;
use crate::models::{ExpenseType, ReceiptFile};
use crate::routes::Route;
use crate::store::{store_follow_new_bill, use_app_store, AppStateStoreFields};
use crate::views::{render_new_bill, AttachmentNotice};

async fn read_receipt(file: &web_sys::File) -> Result<ReceiptFile, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    Ok(ReceiptFile {
        name: file.name(),
        mime: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[component]
pub fn NewBillScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let container = Rc::new(ctx.new_bill_container());
    store_follow_new_bill(store, &container);
    let container = StoredValue::new_local(container);

    let form = RwSignal::new(NewBillForm {
        expense_type: ExpenseType::Transports.label().to_string(),
        ..Default::default()
    });
    let page = move || render_new_bill(&store.attachment().get(), &store.submit().get());

    let on_file = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let container = container.get_value();
        spawn_local(async move {
            let receipt = match read_receipt(&file).await {
                Ok(receipt) => receipt,
                Err(e) => {
                    log::error!("[NewBill] could not read {}: {:?}", file.name(), e);
                    return;
                }
            };
            if let Err(NewBillError::InvalidExtension { .. }) = container.handle_change_file(receipt).await {
                input.set_value("");
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let values = form.get_untracked();
        let container = container.get_value();
        spawn_local(async move {
            if let Err(e) = container.handle_submit(values).await {
                log::warn!("[NewBill] submit not completed: {}", e);
            }
        });
    };

    view! {
        <DashboardShell route=Route::NewBill>
            <div class="content-header">
                <div class="content-title">{move || page().title}</div>
            </div>
            <form data-testid="form-new-bill" class="form-newbill-container" on:submit=on_submit>
                <div class="col-md-6">
                    <label for="expense-type">"Type de dépense"</label>
                    <select
                        required
                        id="expense-type"
                        data-testid="expense-type"
                        class="form-control blue-border"
                        on:change=move |ev| form.update(|f| f.expense_type = event_target_value(&ev))
                    >
                        {ExpenseType::ALL.iter().map(|t| {
                            let label = t.label();
                            view! {
                                <option
                                    value=label
                                    selected=move || form.with(|f| f.expense_type == label)
                                >
                                    {label}
                                </option>
                            }
                        }).collect_view()}
                    </select>

                    <label for="expense-name">"Nom de la dépense"</label>
                    <input
                        type="text"
                        id="expense-name"
                        data-testid="expense-name"
                        class="form-control blue-border"
                        placeholder="Vol Paris Londres"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />

                    <label for="datepicker">"Date"</label>
                    <input
                        required
                        type="date"
                        id="datepicker"
                        data-testid="datepicker"
                        class="form-control blue-border"
                        prop:value=move || form.with(|f| f.date.clone())
                        on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))
                    />

                    <label for="amount">"Montant TTC"</label>
                    <input
                        required
                        type="number"
                        id="amount"
                        data-testid="amount"
                        class="form-control blue-border input-icon input-icon-right"
                        placeholder="348"
                        prop:value=move || form.with(|f| f.amount.clone())
                        on:input=move |ev| form.update(|f| f.amount = event_target_value(&ev))
                    />

                    <label for="vat">"TVA"</label>
                    <div class="flex-input">
                        <input
                            type="number"
                            id="vat"
                            data-testid="vat"
                            class="form-control blue-border"
                            placeholder="70"
                            prop:value=move || form.with(|f| f.vat.clone())
                            on:input=move |ev| form.update(|f| f.vat = event_target_value(&ev))
                        />
                        <input
                            required
                            type="number"
                            id="pct"
                            data-testid="pct"
                            class="form-control blue-border"
                            placeholder="20"
                            prop:value=move || form.with(|f| f.pct.clone())
                            on:input=move |ev| form.update(|f| f.pct = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="col-md-6">
                    <label for="commentary">"Commentaire"</label>
                    <textarea
                        id="commentary"
                        data-testid="commentary"
                        class="form-control blue-border"
                        rows="3"
                        prop:value=move || form.with(|f| f.commentary.clone())
                        on:input=move |ev| form.update(|f| f.commentary = event_target_value(&ev))
                    ></textarea>

                    <label for="file">"Justificatif"</label>
                    <input
                        required
                        type="file"
                        id="file"
                        accept=".jpg,.jpeg,.png,.gif"
                        data-testid="file"
                        class="form-control blue-border"
                        on:change=on_file
                    />
                    {move || match page().attachment {
                        AttachmentNotice::None => None,
                        AttachmentNotice::Uploading(name) => Some(view! {
                            <p class="attachment uploading">{format!("Envoi de {}...", name)}</p>
                        }.into_any()),
                        AttachmentNotice::Attached(name) => Some(view! {
                            <p class="attachment attached">{format!("{} joint", name)}</p>
                        }.into_any()),
                        AttachmentNotice::Rejected(name) => Some(view! {
                            <p class="attachment rejected">{format!("{} refusé : jpg, jpeg, png ou gif uniquement", name)}</p>
                        }.into_any()),
                    }}
                </div>
                {move || page().error.map(|message| view! {
                    <div class="error-message" data-testid="submit-error">{message}</div>
                })}
                <div class="col-md-12">
                    <button
                        type="submit"
                        id="btn-send-bill"
                        class="btn btn-primary"
                        disabled=move || page().busy
                    >
                        "Envoyer"
                    </button>
                </div>
            </form>
        </DashboardShell>
    }
}
