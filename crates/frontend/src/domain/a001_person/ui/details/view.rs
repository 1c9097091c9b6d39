use super::view_model::PersonDetailsViewModel;
use contracts::domain::a001_person::{Person, PersonField};
use leptos::prelude::*;
use std::rc::Rc;

#[component]
fn FieldError(vm: PersonDetailsViewModel, field: PersonField) -> impl IntoView {
    move || {
        vm.error_for(field)
            .map(|message| view! { <div class="field-error">{message}</div> })
    }
}

#[component]
pub fn PersonDetails(on_saved: Rc<dyn Fn(Person)>, on_cancel: Rc<dyn Fn(())>) -> impl IntoView {
    let vm = PersonDetailsViewModel::new();
    let vm_clone = vm.clone();

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{"Person"}</h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="firstName">{"First name"}</label>
                    <input
                        type="text"
                        id="firstName"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.with(|p| p.first_name.clone())
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_first_name(event_target_value(&ev))
                        }
                    />
                    <button class="btn btn-secondary" on:click={
                        let vm = vm_clone.clone();
                        move |_| vm.ask_first_name()
                    }>{"Ask…"}</button>
                    <FieldError vm=vm_clone.clone() field=PersonField::FirstName />
                </div>

                <div class="form-group">
                    <label for="lastName">{"Last name"}</label>
                    <input
                        type="text"
                        id="lastName"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.with(|p| p.last_name.clone())
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_last_name(event_target_value(&ev))
                        }
                    />
                    <FieldError vm=vm_clone.clone() field=PersonField::LastName />
                </div>

                <div class="form-group">
                    <label for="age">{"Age"}</label>
                    <input
                        type="number"
                        id="age"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.with(|p| p.age.to_string())
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_age_input(&event_target_value(&ev))
                        }
                    />
                    <FieldError vm=vm_clone.clone() field=PersonField::Age />
                </div>

                <div class="form-group">
                    <label>{"Full name"}</label>
                    <div class="readonly-field">
                        {
                            let vm = vm_clone.clone();
                            move || vm.full_name()
                        }
                    </div>
                </div>

                <div class="form-actions">
                    <button class="btn btn-primary"
                        disabled={
                            let vm = vm_clone.clone();
                            move || vm.has_errors()
                        }
                        on:click={
                            let vm = vm_clone.clone();
                            let on_saved = on_saved.clone();
                            move |_| {
                                vm.save_command(on_saved.clone())();
                            }
                        }
                    >{"💾 Save"}</button>
                    <button class="btn btn-secondary" on:click=move |_| on_cancel(())>{"Cancel"}</button>
                </div>
            </div>
        </div>
    }
}
