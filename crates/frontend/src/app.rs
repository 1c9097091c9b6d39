use crate::domain::a001_person::ui::details::PersonDetails;
use contracts::domain::a001_person::Person;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn App() -> impl IntoView {
    let (saved, set_saved) = signal(None::<String>);

    let on_saved: Rc<dyn Fn(Person)> = Rc::new(move |person: Person| {
        set_saved.set(Some(person.full_name()));
    });
    let on_cancel: Rc<dyn Fn(())> = Rc::new(move |_| {
        log::debug!("person form cancelled");
        set_saved.set(None);
    });

    view! {
        <main class="app">
            <PersonDetails on_saved=on_saved on_cancel=on_cancel />
            {move || saved.get().map(|name| view! { <p class="saved">{format!("Saved: {}", name)}</p> })}
        </main>
    }
}
