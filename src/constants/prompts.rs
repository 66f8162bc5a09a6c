/// Marker used in prompts to demarcate step boundaries and expected output
/// fields. The same four characters appear in the instructions and in the
/// quiz format the assistant is asked to produce.
pub const DELIMITER: &str = "####";

/// Exact refusal text the assistant is instructed to emit for categories or
/// subjects it has no facts for.
pub const REFUSAL_MESSAGE: &str = "I'm sorry I do not have information about that";

/// Assembles the assistant system prompt around the quiz-bank text.
///
/// Pure string formatting: the same bank text always yields a byte-identical
/// prompt. A missing bank is substituted with empty content so the prompt
/// stays well formed; the bank itself is never parsed or validated here.
pub fn assistant_system_message(quiz_bank: Option<&str>) -> String {
    let quiz_bank = quiz_bank.unwrap_or("");
    format!(
        "
Follow these steps to generate a customized quiz for the user.
The question will be delimited with four hashtags i.e {delimiter}

The user will provide a category that they want to create a quiz for. Any questions included in the quiz
should only refer to the category.

Step 1:{delimiter} First identify the category user is asking about from the following list:
* Geography
* Science
* Art

Step 2:{delimiter} Determine the subjects to generate questions about. The list of topics are below:

{quiz_bank}

Pick up to two subjects that fit the user's category. For example, if the user asks about Geography, you should use the Paris subject since it is explicitly labeled with the Geography category.

Step 3:{delimiter} Generate a quiz for the user. Based on the selected subjects generate 3 questions for the user using the facts about the subject.

Use the following format for the quiz:
Question 1:{delimiter} <question 1>

Question 2:{delimiter} <question 2>

Question 3:{delimiter} <question 3>

Additional rules:

- Only use explicit matches for the category, if the category is not an exact match to categories in the quiz bank, answer that you do not have information.
- If the user asks about a valid category (Geography, Science, or Art) but there are no subjects with that category in the quiz bank, answer \"{refusal}\".
- If the user asks about a subject not in the quiz bank, answer \"{refusal}\".
",
        delimiter = DELIMITER,
        quiz_bank = quiz_bank,
        refusal = REFUSAL_MESSAGE,
    )
}

/// Default human message template for the assistant chain. The lone
/// placeholder is filled with the user's question at invocation time.
pub const ASSISTANT_HUMAN_TEMPLATE: &str = "{question}";

pub const FORMAT_GRADER_SYSTEM_PROMPT: &str = "You are an assistant that evaluates whether or not an assistant is producing valid quizzes.
  The assistant should be producing output in the format of Question N:#### <question N>?";

pub const FORMAT_GRADER_USER_TEMPLATE: &str = "You are evaluating a generated quiz based on the context that the assistant uses to create the quiz.
  Here is the data:
    [BEGIN DATA]
    ************
    [Response]: {agent_response}
    ************
    [END DATA]

Read the response carefully and determine if it looks like a quiz or test. Do not evaluate if the information is correct
only evaluate if the data is in the expected format.

Output Y if the response is a quiz, output N if the response does not look like a quiz.
";

pub const GROUNDING_GRADER_SYSTEM_PROMPT: &str = "You are an assistant that evaluates how well the quiz assistant
    creates quizzes for a user by looking at the set of facts available to the assistant.
    Your primary concern is making sure that ONLY facts available are used. Helpful quizzes only contain facts in the
    test set";

pub const GROUNDING_GRADER_USER_TEMPLATE: &str = "You are evaluating a generated quiz based on the context that the assistant uses to create the quiz.
  Here is the data:
    [BEGIN DATA]
    ************
    [Question Bank]: {context}
    ************
    [Quiz]: {agent_response}
    ************
    [END DATA]

Compare the content of the submission with the question bank using the following steps

1. Review the question bank carefully. These are the only facts the quiz can reference
2. Compare the quiz to the question bank.
3. Ignore differences in grammar or punctuation
4. If a fact is in the quiz, but not in the question bank the quiz is bad.

Remember, the quizzes need to only include facts the assistant is aware of. It is dangerous to allow made up facts.

Output Y if the quiz only contains facts from the question bank, output N if it contains facts that are not in the question bank.
";

pub const NARRATIVE_GRADER_SYSTEM_PROMPT: &str = GROUNDING_GRADER_SYSTEM_PROMPT;

pub const NARRATIVE_GRADER_USER_TEMPLATE: &str = "You are evaluating a generated quiz based on the question bank that the assistant uses to create the quiz.
  Here is the data:
    [BEGIN DATA]
    ************
    [Question Bank]: {context}
    ************
    [Quiz]: {agent_response}
    ************
    [END DATA]

## Examples of quiz questions
Subject: <subject>
   Categories: <category1>, <category2>
   Facts:
    - <fact 1>
    - <fact 2>

## Steps to make a decision
Compare the content of the submission with the question bank using the following steps

1. Review the question bank carefully. These are the only facts the quiz can reference
2. Compare the information in the quiz to the question bank.
3. Ignore differences in grammar or punctuation

Remember, the quizzes should only include information from the question bank.


## Additional rules
- Output an explanation of whether the quiz only references information in the context.
- Make the explanation brief only include a summary of your reasoning for the decsion.
- Include a clear \"Yes\" or \"No\" as the first paragraph.
- Reference facts from the quiz bank if the answer is yes

Separate the decision and the explanation. For example:

************
Decision: <Y>
************
Explanation: <Explanation>
************
";
