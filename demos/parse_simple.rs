use msgcodec::message::Message;

const SIMPLE_MAIL: &str = "\
From: Bob <sender@example.com> \r\n\
To: Alice <recipient@example.com> \r\n\
Subject: Test\r\n\
\x20of folded subject\r\n\
Via: first.example.com\r\n\
Via: second.example.com\r\n\
\r\n\
This one is plain old email with no fancy features like multipart stuff.\r\n\
";

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("Parsing plain old mail: ");
    println!("---\n{}\n---", SIMPLE_MAIL);

    let msg: Message = SIMPLE_MAIL.parse().expect("Message parsing failed");
    for header in msg.get_headers() {
        println!("{:>10}: {:?}", header.name, header.value);
    }
    println!("First Via: {:?}", msg.get_header_value("Via"));
    println!("All Via: {:?}", msg.get_headers().get_all("Via").collect::<Vec<_>>());
    println!("Mail contents: {:#?}", String::from_utf8_lossy(msg.get_body()));

    println!("Produced back:\n---\n{}---", msg);
}
