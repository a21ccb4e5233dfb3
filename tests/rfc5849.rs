use oauthsign::builder::SignatureBaseBuilder;
use oauthsign::v1::{
    construct_base_string, normalize_base_string_uri, sign_hmac_sha1, HmacSha1Signer, OAuthSigner,
    Secrets, SignatureMethod,
};
use oauthsign::{collect_parameters, escape, normalize_parameters, Error};
use pretty_assertions::assert_eq;

#[test]
fn normalize_base_string_uri_strips_port_80() {
    assert_eq!(
        normalize_base_string_uri("http://www.example.com:80").unwrap(),
        "http://www.example.com"
    );
}

#[test]
fn normalize_base_string_uri_rejects_host_and_port() {
    assert!(matches!(
        normalize_base_string_uri("www.example.com:8080"),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn collect_parameters_drops_blank_values() {
    let query = "b5=%3D%253D&a3=a&c%40=&a2=r%20b";
    let params = collect_parameters(Some(query), None, None, true).unwrap();
    assert_eq!(
        params,
        vec![
            ("b5".to_string(), "=%3D".to_string()),
            ("a3".to_string(), "a".to_string()),
            ("a2".to_string(), "r b".to_string()),
        ]
    );
}

#[test]
fn construct_base_string_from_pre_encoded_parts() {
    let header = r#"OAuth realm="Example",oauth_consumer_key="9djdj82h48djs9d2",oauth_token="kkk9d7dh3k39sjv7",oauth_signature_method="HMAC-SHA1",oauth_timestamp="137131201",oauth_nonce="7d8f3e4a",oauth_signature="bYT5CMsGcbgUdFHObYMEfcx6bsw%3D""#;
    // pre-encoded the way the counterpart implementation does, leaving '/' alone
    let base_string_uri = escape("http://example.com/request?b5=%3D%253D&a3=a&c%40=&a2=r%20b")
        .replace("%2F", "/");
    let normalized_parameters = escape(header);

    assert_eq!(
        construct_base_string("post", &base_string_uri, &normalized_parameters),
        "POST&http%3A//example.com/request%3Fb5%3D%253D%25253D%26a3%3Da%26c%2540%3D%26a2%3Dr%2520b&OAuth%20realm%3D%22Example%22%2Coauth_consumer_key%3D%229djdj82h48djs9d2%22%2Coauth_token%3D%22kkk9d7dh3k39sjv7%22%2Coauth_signature_method%3D%22HMAC-SHA1%22%2Coauth_timestamp%3D%22137131201%22%2Coauth_nonce%3D%227d8f3e4a%22%2Coauth_signature%3D%22bYT5CMsGcbgUdFHObYMEfcx6bsw%253D%22"
    );
}

#[test]
fn sign_hmac_sha1_initiate_request() {
    // https://tools.ietf.org/html/rfc5849#section-1.2
    let params = collect_parameters(
        None,
        Some(r#"OAuth realm="Photos", oauth_consumer_key="dpf43f3p2l4k3l03", oauth_signature_method="HMAC-SHA1", oauth_timestamp="137131200", oauth_nonce="wIjqoS""#),
        Some("oauth_callback=http%3A%2F%2Fprinter.example.com%2Fready"),
        true,
    )
    .unwrap();
    let uri = normalize_base_string_uri("https://photos.example.net/initiate").unwrap();
    let base_string = construct_base_string(
        "post",
        &escape(&uri),
        &escape(&normalize_parameters(&params)),
    );

    assert_eq!(
        base_string,
        "POST&https%3A%2F%2Fphotos.example.net%2Finitiate&oauth_callback%3Dhttp%253A%252F%252Fprinter.example.com%252Fready%26oauth_consumer_key%3Ddpf43f3p2l4k3l03%26oauth_nonce%3DwIjqoS%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D137131200"
    );
    assert_eq!(
        sign_hmac_sha1(&base_string, "kd94hf93k423kf44", ""),
        "74KNZJeDHnMBp0EMJ9ZHt/XKycU="
    );
}

#[test]
fn sign_twitter_status_update() {
    // https://developer.twitter.com/en/docs/authentication/oauth-1-0a/creating-a-signature
    let header = r#"OAuth oauth_consumer_key="xvz1evFS4wEEPTGEFPHBog", oauth_nonce="kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg", oauth_signature_method="HMAC-SHA1", oauth_timestamp="1318622958", oauth_token="370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb", oauth_version="1.0""#;
    let request = SignatureBaseBuilder::new(
        "post",
        "https://api.twitter.com/1.1/statuses/update.json?include_entities=true",
    )
    .authorization_header(header)
    .body("status=Hello%20Ladies%20%2B%20Gentlemen%2C%20a%20signed%20OAuth%20request%21");

    assert_eq!(
        request.base_string().unwrap(),
        "POST&https%3A%2F%2Fapi.twitter.com%2F1.1%2Fstatuses%2Fupdate.json&include_entities%3Dtrue%26oauth_consumer_key%3Dxvz1evFS4wEEPTGEFPHBog%26oauth_nonce%3DkYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1318622958%26oauth_token%3D370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb%26oauth_version%3D1.0%26status%3DHello%2520Ladies%2520%252B%2520Gentlemen%252C%2520a%2520signed%2520OAuth%2520request%2521"
    );

    let signer = HmacSha1Signer::new(Secrets::with_token_secret(
        "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
        "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
    ));
    let signature = request.sign(&signer).unwrap();
    assert_eq!(signature, "hCtSmYh+iHYCEqBWrE7C7hYmtUk=");
    assert!(request.verify(&signer, &signature).unwrap());
    assert_eq!(
        request.declared_signature_method().unwrap(),
        SignatureMethod::HmacSha1
    );
    assert_eq!(signer.signature_method(), SignatureMethod::HmacSha1);
}
