//! The quiz transition table and actor composition.

use crate::actor::{Actor, ActorConfig};
use crate::builder::{BuildError, MachineBuilder, TransitionBuilder};
use crate::core::Guard;
use crate::quiz::actions;
use crate::quiz::context::AppContext;
use crate::quiz::event::QuizEvent;
use crate::quiz::guards;
use crate::quiz::question::QuestionBank;
use crate::quiz::state::QuizState;

pub const MACHINE_ID: &str = "quizApp";

pub type QuizMachine = crate::machine::MachineDefinition<QuizState, AppContext, QuizEvent>;
pub type QuizActor = Actor<QuizState, AppContext, QuizEvent>;

type Step = TransitionBuilder<QuizState, AppContext, QuizEvent>;

/// Build the quiz transition table over `bank`.
///
/// | from | event | guard | to |
/// |---|---|---|---|
/// | idle | START_QUIZ | | questionModal |
/// | idle | RESET_QUIZ | | idle |
/// | questionModal | SELECT_CHOICE | | questionModal |
/// | questionModal | SUBMIT_ANSWER | | answerFeedback |
/// | answerFeedback | NEXT_QUESTION | completed | quizComplete |
/// | answerFeedback | NEXT_QUESTION | in progress | questionModal |
/// | quizComplete | RESET_QUIZ | | idle |
/// | quizComplete | LEAVE_QUIZ | | idle |
///
/// The two `NEXT_QUESTION` guards are one predicate and its negation, so
/// exactly one of them passes. The completion guard is checked before the
/// index is advanced, so the machine never loads a question past the end of
/// the bank.
pub fn quiz_machine(bank: QuestionBank) -> Result<QuizMachine, BuildError> {
    use QuizState::*;

    let completed = Guard::new(guards::quiz_completed);
    let start_bank = bank.clone();
    let submit_bank = bank.clone();
    let next_bank = bank;

    MachineBuilder::new()
        .id(MACHINE_ID)
        .initial(Idle)
        .context(AppContext::default())
        .transition(
            Step::new()
                .from(Idle)
                .on(QuizEvent::START_QUIZ)
                .to(QuestionModal)
                .action(move |context, _| actions::start_quiz(&start_bank, context)),
        )?
        .transition(
            Step::new()
                .from(Idle)
                .on(QuizEvent::RESET_QUIZ)
                .to(Idle)
                .action(|context, _| actions::reset_quiz(context)),
        )?
        .transition(
            Step::new()
                .from(QuestionModal)
                .on(QuizEvent::SELECT_CHOICE)
                .to(QuestionModal)
                .action(|context, event| match event {
                    QuizEvent::SelectChoice { choice } => actions::select_choice(context, choice),
                    _ => context.clone(),
                }),
        )?
        .transition(
            Step::new()
                .from(QuestionModal)
                .on(QuizEvent::SUBMIT_ANSWER)
                .to(AnswerFeedback)
                .action(move |context, _| actions::submit_answer(&submit_bank, context)),
        )?
        .transition(
            Step::new()
                .from(AnswerFeedback)
                .on(QuizEvent::NEXT_QUESTION)
                .to(QuizComplete)
                .guard(completed.clone()),
        )?
        .transition(
            Step::new()
                .from(AnswerFeedback)
                .on(QuizEvent::NEXT_QUESTION)
                .to(QuestionModal)
                .guard(completed.negate())
                .action(move |context, _| actions::load_next_question(&next_bank, context)),
        )?
        .transition(
            Step::new()
                .from(QuizComplete)
                .on(QuizEvent::RESET_QUIZ)
                .to(Idle)
                .action(|context, _| actions::reset_quiz(context)),
        )?
        .transition(
            Step::new()
                .from(QuizComplete)
                .on(QuizEvent::LEAVE_QUIZ)
                .to(Idle)
                .action(|context, _| actions::reset_quiz(context)),
        )?
        .build()
}

/// Actor over the quiz machine with default configuration.
pub fn quiz_actor(bank: QuestionBank) -> Result<QuizActor, BuildError> {
    quiz_actor_with_config(bank, ActorConfig::default())
}

pub fn quiz_actor_with_config(
    bank: QuestionBank,
    config: ActorConfig,
) -> Result<QuizActor, BuildError> {
    Ok(Actor::with_config(quiz_machine(bank)?, config))
}
