use msgcodec::message::{Message, RFC5322_RECOMMENDED_LINE_LENGTH};

fn main() {
    let mut msg = Message::new();
    msg.set_header("Subject", "This is a test", false);
    msg.set_header(
        "References",
        "<1234@local.machine.example> <3456@example.net> <7890@remote.host.example> <abcd@mail.example.org>",
        false,
    );
    msg.set_body("Folding applies to the body too, which is emitted as one logical line and wrapped at whitespace.");

    println!("Unfolded:\n---\n{}---", msg);

    msg.set_line_length(RFC5322_RECOMMENDED_LINE_LENGTH);
    let folded = msg.produce();
    println!("Folded at {}:\n---\n{}---", RFC5322_RECOMMENDED_LINE_LENGTH, String::from_utf8_lossy(&folded));

    msg.set_line_length(14);
    println!("Folded at 14:\n---\n{}---", msg);

    let mut unfolded = Message::new();
    unfolded.parse_bytes(&folded).expect("Folded message has to parse");
    println!("Parsed back references: {:?}", unfolded.get_header_value("References"));
}
