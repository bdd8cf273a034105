//! End-to-end quiz flows driven through the actor.

use quizset::quiz::{quiz_actor, AppContext, QuestionBank, QuizActor, QuizEvent, QuizState, QuizSummary};
use quizset::{SendOutcome, Snapshot};
use std::cell::RefCell;
use std::rc::Rc;

fn actor() -> QuizActor {
    quiz_actor(QuestionBank::sample()).unwrap()
}

fn answer(actor: &QuizActor, choice: &str) {
    actor.send(QuizEvent::select(choice));
    actor.send(QuizEvent::SubmitAnswer);
}

#[test]
fn fresh_actor_is_idle() {
    let snapshot = actor().snapshot();

    assert_eq!(snapshot.state, QuizState::Idle);
    assert_eq!(snapshot.context.score, 0);
    assert!(snapshot.context.current_question.is_none());
    assert!(snapshot.context.selected_choice.is_none());
}

#[test]
fn start_quiz_shows_first_question() {
    let actor = actor();
    actor.send(QuizEvent::StartQuiz);

    let snapshot = actor.snapshot();
    assert_eq!(snapshot.state, QuizState::QuestionModal);
    assert_eq!(
        snapshot.context.current_question.unwrap().text,
        "What is the capital of France?"
    );
    assert_eq!(snapshot.context.score, 0);
}

#[test]
fn selecting_a_choice_stays_on_the_question() {
    let actor = actor();
    actor.send(QuizEvent::StartQuiz);
    actor.send(QuizEvent::select("London"));
    actor.send(QuizEvent::select("Paris"));

    assert_eq!(actor.state(), QuizState::QuestionModal);
    assert_eq!(actor.context().selected_choice.as_deref(), Some("Paris"));
}

#[test]
fn correct_answer_scores_a_point() {
    let actor = actor();
    actor.send(QuizEvent::StartQuiz);
    answer(&actor, "Paris");

    let snapshot = actor.snapshot();
    assert_eq!(snapshot.state, QuizState::AnswerFeedback);
    assert_eq!(snapshot.context.score, 1);
    assert_eq!(snapshot.context.is_answer_correct, Some(true));
}

#[test]
fn wrong_answer_scores_nothing() {
    let actor = actor();
    actor.send(QuizEvent::StartQuiz);
    answer(&actor, "London");

    let snapshot = actor.snapshot();
    assert_eq!(snapshot.state, QuizState::AnswerFeedback);
    assert_eq!(snapshot.context.score, 0);
    assert_eq!(snapshot.context.is_answer_correct, Some(false));
}

#[test]
fn submitting_without_a_choice_is_accepted() {
    let actor = actor();
    actor.send(QuizEvent::StartQuiz);

    assert_eq!(actor.send(QuizEvent::SubmitAnswer), SendOutcome::Transitioned);

    let snapshot = actor.snapshot();
    assert_eq!(snapshot.state, QuizState::AnswerFeedback);
    assert_eq!(snapshot.context.score, 0);
    assert_eq!(snapshot.context.is_answer_correct, None);
}

#[test]
fn answering_everything_correctly_completes_with_full_score() {
    let actor = actor();
    actor.send(QuizEvent::StartQuiz);

    for choice in ["Paris", "4", "Jupiter"] {
        answer(&actor, choice);
        assert_eq!(actor.context().is_answer_correct, Some(true));
        actor.send(QuizEvent::NextQuestion);
    }

    let snapshot = actor.snapshot();
    assert_eq!(snapshot.state, QuizState::QuizComplete);
    assert_eq!(snapshot.context.score, 3);
    assert!(snapshot.context.quiz_completed);

    let summary = QuizSummary::from_context(&snapshot.context, &QuestionBank::sample());
    assert_eq!(summary.percentage, 100);
}

#[test]
fn next_question_loads_following_question() {
    let actor = actor();
    actor.send(QuizEvent::StartQuiz);
    answer(&actor, "Berlin");
    actor.send(QuizEvent::NextQuestion);

    let context = actor.context();
    assert_eq!(actor.state(), QuizState::QuestionModal);
    assert_eq!(context.current_question_index, 1);
    assert_eq!(context.current_question.unwrap().text, "What is 2 + 2?");
    assert!(context.selected_choice.is_none());
    assert!(context.is_answer_correct.is_none());
}

#[test]
fn invalid_event_in_quiz_complete_then_reset() {
    let actor = actor();
    actor.send(QuizEvent::StartQuiz);
    for choice in ["Paris", "3", "Jupiter"] {
        answer(&actor, choice);
        actor.send(QuizEvent::NextQuestion);
    }
    let completed = actor.snapshot();
    assert_eq!(completed.state, QuizState::QuizComplete);

    assert_eq!(actor.send(QuizEvent::StartQuiz), SendOutcome::Ignored);
    assert_eq!(actor.snapshot(), completed);

    actor.send(QuizEvent::ResetQuiz);
    assert_eq!(
        actor.snapshot(),
        Snapshot {
            state: QuizState::Idle,
            context: AppContext::default(),
        }
    );
}

#[test]
fn leave_quiz_returns_to_idle() {
    let actor = actor();
    actor.send(QuizEvent::StartQuiz);
    for _ in 0..3 {
        actor.send(QuizEvent::SubmitAnswer);
        actor.send(QuizEvent::NextQuestion);
    }
    assert_eq!(actor.state(), QuizState::QuizComplete);

    actor.send(QuizEvent::LeaveQuiz);
    assert_eq!(actor.state(), QuizState::Idle);
    assert!(actor.context().is_boot());
}

#[test]
fn quiz_can_be_replayed_after_reset() {
    let actor = actor();
    for _ in 0..2 {
        actor.send(QuizEvent::StartQuiz);
        for choice in ["Paris", "4", "Saturn"] {
            answer(&actor, choice);
            actor.send(QuizEvent::NextQuestion);
        }
        assert_eq!(actor.context().score, 2);
        actor.send(QuizEvent::ResetQuiz);
    }

    assert_eq!(actor.state(), QuizState::Idle);
}

#[test]
fn subscribers_observe_each_state_change() {
    let actor = actor();
    let states = Rc::new(RefCell::new(Vec::new()));

    let seen = Rc::clone(&states);
    let subscription = actor.subscribe(move |snapshot| seen.borrow_mut().push(snapshot.state));

    actor.send(QuizEvent::StartQuiz);
    actor.send(QuizEvent::LeaveQuiz);
    answer(&actor, "Paris");
    actor.send(QuizEvent::NextQuestion);

    assert_eq!(
        *states.borrow(),
        vec![
            QuizState::QuestionModal,
            QuizState::QuestionModal,
            QuizState::AnswerFeedback,
            QuizState::QuestionModal,
        ]
    );

    subscription.unsubscribe();
    actor.send(QuizEvent::select("4"));
    assert_eq!(states.borrow().len(), 4);
}

#[test]
fn history_records_taken_transitions() {
    let actor = actor();
    actor.send(QuizEvent::StartQuiz);
    actor.send(QuizEvent::NextQuestion);
    answer(&actor, "Paris");

    let history = actor.history();
    let events: Vec<&str> = history.transitions().iter().map(|t| t.event.as_str()).collect();
    assert_eq!(events, vec!["START_QUIZ", "SELECT_CHOICE", "SUBMIT_ANSWER"]);
    assert_eq!(
        history.get_path(),
        vec![
            &QuizState::Idle,
            &QuizState::QuestionModal,
            &QuizState::QuestionModal,
            &QuizState::AnswerFeedback,
        ]
    );
}

#[test]
fn history_spans_a_completed_quiz() {
    let actor = actor();
    assert!(actor.history().duration().is_none());

    actor.send(QuizEvent::StartQuiz);
    for choice in ["Paris", "4", "Jupiter"] {
        answer(&actor, choice);
        actor.send(QuizEvent::NextQuestion);
    }

    let history = actor.history();
    assert_eq!(actor.state(), QuizState::QuizComplete);
    assert_eq!(history.transitions().last().unwrap().to, QuizState::QuizComplete);
    assert!(history.duration().is_some());
}

#[test]
fn events_arrive_as_json_from_the_boundary() {
    let actor = actor();
    let inputs = [
        r#"{"type": "START_QUIZ"}"#,
        r#"{"type": "SELECT_CHOICE", "choice": "Paris"}"#,
        r#"{"type": "SUBMIT_ANSWER"}"#,
    ];

    for input in inputs {
        let event: QuizEvent = serde_json::from_str(input).unwrap();
        actor.send(event);
    }

    let json = serde_json::to_value(actor.snapshot()).unwrap();
    assert_eq!(json["state"], "answerFeedback");
    assert_eq!(json["context"]["score"], 1);
    assert_eq!(json["context"]["isAnswerCorrect"], true);
}
