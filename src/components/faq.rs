use leptos::prelude::*;

use crate::components::{IconSvg, Reveal};
use crate::models::{Faq as FaqEntry, Icon};

/// Accordion state after clicking question `index`: at most one answer is
/// open, and clicking the open one closes it.
pub fn toggled(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[component]
pub fn Faq(faqs: &'static [FaqEntry]) -> impl IntoView {
    let (open, set_open) = signal(Option::<usize>::None);

    view! {
        <section id="faq" class="section section-faq">
            <div class="container narrow">
                <Reveal>
                    <h2 class="section-title center">"FAQ"</h2>
                    <div class="faq-list">
                        {faqs
                            .iter()
                            .enumerate()
                            .map(|(i, faq)| {
                                let is_open = move || open.get() == Some(i);
                                view! {
                                    <div class="faq-item">
                                        <button
                                            class="faq-question"
                                            aria-expanded=move || is_open().to_string()
                                            on:click=move |_| set_open.update(|o| *o = toggled(*o, i))
                                        >
                                            {faq.question.as_str()}
                                            <span class="faq-chevron" class:open=is_open>
                                                <IconSvg icon=Icon::ChevronDown/>
                                            </span>
                                        </button>
                                        <div class="faq-answer" class:open=is_open>
                                            <p>{faq.answer.as_str()}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_question_closes_the_other() {
        let open = toggled(None, 1);
        assert_eq!(open, Some(1));
        assert_eq!(toggled(open, 3), Some(3));
    }

    #[test]
    fn clicking_open_question_closes_it() {
        assert_eq!(toggled(Some(2), 2), None);
    }
}
